//! CLI tool to mint a session token, standing in for the login service
//! during local development.
//!
//! Usage:
//!   cargo run --bin issue-session-token -- --username alice [--id 42] [--ttl 3600]

use std::env;

use website_lib::auth::{issue_session_token, session_cookie};
use website_lib::config::{Config, parse_session_ttl};
use website_lib::models::CurrentUser;

fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    let mut username: Option<String> = None;
    let mut id: Option<String> = None;
    let mut ttl: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--username" | "-u" => {
                i += 1;
                if i < args.len() {
                    username = Some(args[i].clone());
                }
            }
            "--id" => {
                i += 1;
                if i < args.len() {
                    id = Some(args[i].clone());
                }
            }
            "--ttl" | "-t" => {
                i += 1;
                if i < args.len() {
                    ttl = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let username = match username {
        Some(u) if !u.trim().is_empty() => u,
        _ => {
            eprintln!("Error: --username is required");
            print_usage();
            std::process::exit(1);
        }
    };

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let ttl_secs = match ttl.as_deref().map(parse_session_ttl) {
        None => config.session.ttl_secs,
        Some(Ok(secs)) => secs,
        Some(Err(e)) => {
            eprintln!("Error: --ttl: {}", e);
            std::process::exit(1);
        }
    };

    let user = CurrentUser {
        id: id.unwrap_or_else(|| username.clone()),
        username,
    };

    let token = match issue_session_token(&user, &config.session.secret, ttl_secs) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error issuing token: {}", e);
            std::process::exit(1);
        }
    };
    let cookie = session_cookie(&config.session, token.clone());

    println!();
    println!("  User:     {} (id={})", user.username, user.id);
    println!("  Expires:  in {}s", ttl_secs);
    println!();
    println!("  Token:    {}", token);
    println!("  Cookie:   {}", cookie);
    println!();
    println!(
        "  curl -b '{}={}' http://{}/home",
        config.session.cookie_name,
        token,
        config.bind_address()
    );
    println!();
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: issue-session-token --username <name> [--id <id>] [--ttl <secs>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --username, -u  Username shown on the home page (required)");
    eprintln!("  --id            User id (default: the username)");
    eprintln!("  --ttl, -t       Lifetime in seconds (default: SITE_SESSION_TTL_SECS)");
    eprintln!("  --help, -h      Show this help");
    eprintln!();
}
