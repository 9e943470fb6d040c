//! Folio Console - terminal client for the Folio server.
//!
//! Drives the list and form view states against a running server over the
//! REST surface, the same way the browser client does.

use std::io::{self, Write};

use clap::Parser;

use folio_server::{
    client::BooksApi,
    config::{AppConfig, ClientConfig},
    ui::{FormView, ListPhase, ListView, LoadOutcome, SubmitOutcome, GENRE_OPTIONS},
};

#[derive(Parser)]
#[command(name = "folio-console", about = "Terminal client for the Folio book catalog")]
struct Args {
    /// Base URL of the Folio server; defaults to the client.base_url setting
    #[arg(long)]
    base_url: Option<String>,
}

/// The flag wins; otherwise the configured client.base_url, falling back
/// to its default when no config files are around.
fn resolve_base_url(flag: Option<String>) -> String {
    flag.unwrap_or_else(|| {
        AppConfig::load()
            .map(|config| config.client.base_url)
            .unwrap_or_else(|_| ClientConfig::default().base_url)
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let api = BooksApi::new(resolve_base_url(args.base_url));

    let mut list = ListView::new();
    list.refresh(&api).await;

    loop {
        render_list(&list);
        match prompt("command (l=list r=reviews n=new e=edit d=delete q=quit)")?.as_str() {
            "q" => break,
            "l" => list.refresh(&api).await,
            "n" => {
                run_form(&api, FormView::new_create()).await?;
                list.refresh(&api).await;
            }
            cmd => {
                let (action, rest) = cmd.split_at(cmd.len().min(1));
                let Some(book) = rest
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| list.books.get(n.wrapping_sub(1)))
                else {
                    println!("unknown command or row: {}", cmd);
                    continue;
                };
                match action {
                    "r" => render_reviews(book),
                    "e" => {
                        let id = book.id.clone();
                        let mut form = FormView::new_edit(id);
                        if let LoadOutcome::BackToList(message) = form.load(&api).await {
                            println!("error: {}", message);
                            continue;
                        }
                        run_form(&api, form).await?;
                        list.refresh(&api).await;
                    }
                    "d" => {
                        let id = book.id.clone();
                        list.delete(&api, &id).await;
                    }
                    _ => println!("unknown command: {}", cmd),
                }
            }
        }
    }

    Ok(())
}

fn render_list(list: &ListView) {
    println!();
    match list.phase {
        ListPhase::Loading => println!("Loading..."),
        ListPhase::Failed => {
            println!("Error: {}", list.error.as_deref().unwrap_or("unknown"));
        }
        ListPhase::Ready => {
            println!("Book Records ({})", list.books.len());
            for (n, book) in list.books.iter().enumerate() {
                println!(
                    "{:>3}. {} - {} (rating {}, {} pages, genres: {}, {} review(s))",
                    n + 1,
                    book.title,
                    book.author,
                    book.rating,
                    book.pages,
                    book.genres.join(", "),
                    book.reviews.len()
                );
            }
            if let Some(ref message) = list.error {
                println!("error: {}", message);
            }
        }
    }
}

fn render_reviews(book: &folio_server::models::Book) {
    println!("Reviews for {}:", book.title);
    for (n, review) in book.reviews.iter().enumerate() {
        println!("{:>3}. {}: {}", n + 1, review.name, review.body);
    }
    if book.reviews.is_empty() {
        println!("  (none)");
    }
}

/// Edit loop for the shared create/edit form
async fn run_form(api: &BooksApi, mut form: FormView) -> anyhow::Result<()> {
    loop {
        println!();
        println!(
            "{} | title: {:?} author: {:?} rating: {} pages: {} genres: [{}] reviews: {}",
            if form.is_edit() { "Edit Book" } else { "Create New Book" },
            form.draft.title,
            form.draft.author,
            form.draft.rating,
            form.draft.pages,
            form.draft.genres.join(", "),
            form.draft.reviews.len()
        );
        if let Some(ref message) = form.error {
            println!("error: {}", message);
        }

        match prompt("field (t=title a=author r=rating p=pages g=genres v=add-review x=rm-review s=save c=cancel)")?
            .as_str()
        {
            "c" => return Ok(()),
            "t" => form.draft.title = prompt("title")?,
            "a" => form.draft.author = prompt("author")?,
            "r" => form.draft.rating = prompt("rating (0-10)")?.parse().unwrap_or(0.0),
            "p" => form.draft.pages = prompt("pages")?.parse().unwrap_or(0),
            "g" => {
                for (n, genre) in GENRE_OPTIONS.iter().enumerate() {
                    let mark = if form.draft.genres.iter().any(|g| g == genre) {
                        "x"
                    } else {
                        " "
                    };
                    println!("{:>3}. [{}] {}", n + 1, mark, genre);
                }
                if let Ok(n) = prompt("toggle genre #")?.parse::<usize>() {
                    if let Some(genre) = GENRE_OPTIONS.get(n.wrapping_sub(1)) {
                        form.toggle_genre(genre);
                    }
                }
            }
            "v" => {
                form.review_name = prompt("reviewer name")?;
                form.review_body = prompt("review")?;
                form.add_review();
            }
            "x" => {
                if let Ok(n) = prompt("remove review #")?.parse::<usize>() {
                    form.remove_review(n.wrapping_sub(1));
                }
            }
            "s" => {
                if form.submit(api).await == SubmitOutcome::Saved {
                    println!("saved");
                    return Ok(());
                }
                // Submit failed or validation stopped it; draft is retained
            }
            other => println!("unknown field: {}", other),
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}> ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(
            resolve_base_url(Some("http://example:9999".to_string())),
            "http://example:9999"
        );
    }

    #[test]
    fn absent_flag_falls_back_to_client_config() {
        // cargo test runs from the crate root, where config/default.toml lives
        assert_eq!(resolve_base_url(None), "http://localhost:3000");
    }
}
