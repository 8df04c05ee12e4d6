use std::error::Error;

use cakemail_client::{date, CakeMailClient, RelayLog};
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogKind {
    Sent,
    Open,
    Click,
    Bounce,
}

/// Print the relay logs of a CakeMail account.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// CakeMail API key
    #[arg(long, env = "CAKEMAIL_API_KEY", hide_env_values = true)]
    api_key: String,

    /// User key of the account owner
    #[arg(long, env = "CAKEMAIL_USER_KEY", hide_env_values = true)]
    user_key: String,

    /// Which log to read
    #[arg(long, value_enum, default_value_t = LogKind::Sent)]
    kind: LogKind,

    /// Restrict to one tracked relay
    #[arg(long)]
    tracking_id: Option<i64>,

    /// Only items logged at or after this date (YYYY-MM-DD HH:MM:SS)
    #[arg(long)]
    since: Option<String>,

    #[arg(long, default_value_t = 20)]
    limit: u32,
}

fn print_line(log: &RelayLog, extra: &str) {
    let when = log
        .time
        .map(|t| date::format(&t))
        .unwrap_or_else(|| "-".to_string());
    println!("{:>8}  {}  {}  {}", log.id, when, log.email, extra);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();

    let since = match args.since.as_deref() {
        Some(raw) => date::parse(raw)?,
        None => None,
    };

    let client = CakeMailClient::builder().api_key(args.api_key).build()?;
    let relays = client.relays();

    macro_rules! configure {
        ($builder:expr) => {{
            let mut builder = $builder.limit(args.limit);
            if let Some(id) = args.tracking_id {
                builder = builder.tracking_id(id);
            }
            if let Some(start) = since {
                builder = builder.start(start);
            }
            builder
        }};
    }

    match args.kind {
        LogKind::Sent => {
            for log in configure!(relays.sent_logs(&args.user_key)).send().await? {
                print_line(&log, log.subject.as_deref().unwrap_or(""));
            }
        }
        LogKind::Open => {
            for log in configure!(relays.open_logs(&args.user_key)).send().await? {
                print_line(&log.log, log.user_agent.as_deref().unwrap_or(""));
            }
        }
        LogKind::Click => {
            for log in configure!(relays.click_logs(&args.user_key)).send().await? {
                print_line(&log.log, &log.url);
            }
        }
        LogKind::Bounce => {
            for log in configure!(relays.bounce_logs(&args.user_key)).send().await? {
                print_line(&log.log, log.message.as_deref().unwrap_or(""));
            }
        }
    }

    Ok(())
}
