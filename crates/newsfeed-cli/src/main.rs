use clap::{Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::error::Error;

#[derive(Parser)]
#[command(name = "newsfeed")]
#[command(about = "A CLI for browsing the newsfeed service")]
struct Cli {
    /// Base URL for the newsfeed service
    #[arg(long, default_value = "http://localhost:3000")]
    service_url: String,

    /// Print the raw JSON response instead of a summary
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all published news
    List,
    /// Show one news item with its comments
    Show {
        /// ID of the news item
        id: i64,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsSummary {
    id: i64,
    author: String,
    published_at: String,
    teaser: String,
    last_comment: Option<String>,
    comments_count: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsList {
    news: Vec<NewsSummary>,
    total_results: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentEntry {
    user: String,
    comment: String,
    published_at: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewsDetail {
    id: i64,
    author: String,
    published_at: String,
    content: String,
    comments: Vec<CommentEntry>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::List => list_news(&client, &cli.service_url, cli.json).await?,
        Commands::Show { id } => show_news(&client, &cli.service_url, id, cli.json).await?,
    }

    Ok(())
}

async fn list_news(client: &Client, service_url: &str, raw: bool) -> Result<(), Box<dyn Error>> {
    let response = client.get(format!("{service_url}/")).send().await?;

    if !response.status().is_success() {
        eprintln!("Failed to list news: {}", response.status());
        eprintln!("Response: {}", response.text().await?);
        return Ok(());
    }

    if raw {
        let body: serde_json::Value = response.json().await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let list: NewsList = response.json().await?;
    println!("{} news item(s)", list.total_results);
    for item in list.news {
        let last = item.last_comment.as_deref().unwrap_or("-");
        println!(
            "[{}] {} by {} ({} comments, last: {})",
            item.id, item.published_at, item.author, item.comments_count, last
        );
        println!("    {}", item.teaser);
    }

    Ok(())
}

async fn show_news(
    client: &Client,
    service_url: &str,
    id: i64,
    raw: bool,
) -> Result<(), Box<dyn Error>> {
    let response = client
        .get(format!("{service_url}/news/{id}"))
        .send()
        .await?;

    match response.status() {
        StatusCode::NOT_FOUND => {
            eprintln!("News item {id} not found");
            return Ok(());
        }
        status if !status.is_success() => {
            eprintln!("Failed to fetch news item: {status}");
            eprintln!("Response: {}", response.text().await?);
            return Ok(());
        }
        _ => {}
    }

    if raw {
        let body: serde_json::Value = response.json().await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let detail: NewsDetail = response.json().await?;
    println!("[{}] {} by {}", detail.id, detail.published_at, detail.author);
    println!();
    println!("{}", detail.content);
    println!();
    println!("{} comment(s)", detail.comments.len());
    for entry in detail.comments {
        println!("  {} {}: {}", entry.published_at, entry.user, entry.comment);
    }

    Ok(())
}
