//! byteblog - render blog posts to HTML

use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use byteblog::config::{CONFIG_ENV, Config};
use byteblog::page::{self, DocumentHead};
use byteblog::util::{decode_text, read_text};
use byteblog::{PostCollection, PostDraft, ReadingTime, Result, format_content_to_html};

#[derive(Parser)]
#[command(name = "byteblog")]
#[command(version, about = "Render ByteBlog posts to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    byteblog render draft.md                Print the draft as HTML
    byteblog reading-time draft.md          Print the estimated reading time
    byteblog show posts.json welcome        Render one post from an export
    byteblog list posts.json --tag rust     Render the listing for a tag")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format post content as HTML
    Render {
        /// Markdown file; reads stdin when omitted or "-"
        #[arg(value_name = "INPUT")]
        input: Option<String>,

        /// Also print the reading time to stderr
        #[arg(short, long)]
        reading_time: bool,

        /// Wrap the output in a complete HTML document
        #[arg(short, long)]
        document: bool,
    },

    /// Print the estimated reading time of post content
    ReadingTime {
        /// Markdown file; reads stdin when omitted or "-"
        #[arg(value_name = "INPUT")]
        input: Option<String>,

        /// Also print the word count
        #[arg(short, long)]
        words: bool,
    },

    /// Render one post's detail page from a JSON export
    Show {
        /// JSON file with a posts array or {"posts": [...]}
        #[arg(value_name = "POSTS")]
        posts: String,

        /// Post id
        id: String,

        /// Wrap the output in a complete HTML document
        #[arg(short, long)]
        document: bool,
    },

    /// Render the post listing, newest first
    List {
        /// JSON file with a posts array or {"posts": [...]}
        #[arg(value_name = "POSTS")]
        posts: String,

        /// Only posts with this tag
        #[arg(short, long, conflicts_with = "query")]
        tag: Option<String>,

        /// Only posts whose title, tags or summary contain this text
        #[arg(short = 's', long)]
        query: Option<String>,
    },

    /// List the distinct tags used by posts
    Tags {
        /// JSON file with a posts array or {"posts": [...]}
        #[arg(value_name = "POSTS")]
        posts: String,
    },

    /// Validate a draft before publishing
    Check {
        /// JSON file with title, summary, content, tags and coverUrl
        #[arg(value_name = "DRAFT")]
        draft: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    // Only commands that render a document or a listing read the config
    let config_path = cli.config;
    let load_config = || Config::load(config_path.as_deref());

    match cli.command {
        Command::Render {
            input,
            reading_time,
            document,
        } => {
            let raw = read_input(input.as_deref())?;
            let html = format_content_to_html(&raw);
            if reading_time {
                eprintln!("{}", ReadingTime::from_text(&raw));
            }
            if document {
                let config = load_config()?;
                let head = DocumentHead::new(config.site_name).with_stylesheet(config.stylesheet);
                print!("{}", page::render_document(&head, &html));
            } else {
                println!("{html}");
            }
        }

        Command::ReadingTime { input, words } => {
            let raw = read_input(input.as_deref())?;
            let estimate = ReadingTime::from_text(&raw);
            if words {
                println!("{estimate} ({} words)", estimate.words);
            } else {
                println!("{estimate}");
            }
        }

        Command::Show {
            posts,
            id,
            document,
        } => {
            let posts = PostCollection::load(&posts)?.or_sample();
            let post = posts.find(&id)?;
            let html = page::render_post(post);
            if document {
                let config = load_config()?;
                let head = DocumentHead::for_post(post, &config.site_name)
                    .with_stylesheet(config.stylesheet);
                print!("{}", page::render_document(&head, &html));
            } else {
                print!("{html}");
            }
        }

        Command::List { posts, tag, query } => {
            let posts = PostCollection::load(&posts)?.or_sample();
            let html = match (tag, query) {
                (Some(tag), _) => {
                    let tagged = posts.with_tag(&tag);
                    tracing::info!(tag = %tag, count = tagged.len(), "tag listing");
                    page::render_tag_page(&tag, &tagged)
                }
                (None, Some(query)) => {
                    page::render_post_list(posts.search(&query), &load_config()?.empty_message)
                }
                (None, None) => {
                    page::render_post_list(posts.recent(), &load_config()?.empty_message)
                }
            };
            print!("{html}");
        }

        Command::Tags { posts } => {
            let posts = PostCollection::load(&posts)?.or_sample();
            for tag in posts.tags() {
                println!("{tag}");
            }
        }

        Command::Check { draft } => {
            let draft = PostDraft::from_json(&read_text(&draft)?)?;
            draft.validate()?;
            println!("ok: {} ({})", draft.slug(), ReadingTime::from_text(&draft.content));
        }
    }

    Ok(())
}

/// Read a file, or stdin for `None` / `"-"`.
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => read_text(path),
        _ => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            Ok(decode_text(&bytes).into_owned())
        }
    }
}
