use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libraryflow::AppState;
use libraryflow::infrastructure::config::Config;
use libraryflow::infrastructure::seed::GENRES;
use libraryflow::infrastructure::store::JsonFileStore;
use libraryflow::models::{NewUser, User};
use libraryflow::services::{recommendation_service, rental_service, session_service};

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "libraryflow=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        "Using data directory {} (profile {})",
        config.data_dir.display(),
        config.profile
    );

    let store = match JsonFileStore::open(&config.data_dir) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            eprintln!("Cannot open data directory: {e}");
            std::process::exit(1);
        }
    };

    let state = AppState::new(store);
    if let Err(e) = state.initialize() {
        eprintln!("Initialization failed: {e}");
        std::process::exit(1);
    }

    // Resume a session persisted by a previous run
    let mut user = session_service::current_user(&state).unwrap_or(None);
    match &user {
        Some(u) => println!("Welcome back, {}!", u.name),
        None => println!("Welcome to LibraryFlow. Type 'help' for commands."),
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Input error: {e}");
                break;
            }
        }

        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let arg = parts.next();

        match command {
            "" => {}
            "help" => print_help(),
            "signup" => match signup_prompt(&state) {
                Ok(u) => {
                    println!("Welcome {}! Happy reading!", u.name);
                    user = Some(u);
                }
                Err(e) => println!("{e}"),
            },
            "login" => match login_prompt(&state) {
                Ok(u) => {
                    println!("Welcome back, {}!", u.name);
                    user = Some(u);
                }
                Err(e) => println!("{e}"),
            },
            "logout" => match session_service::logout(&state) {
                Ok(()) => {
                    user = None;
                    println!("You have been logged out successfully.");
                }
                Err(e) => println!("{e}"),
            },
            "whoami" => match &user {
                Some(u) => println!("{} <{}>", u.name, u.email),
                None => println!("Not logged in."),
            },
            "catalog" => show_catalog(&state),
            "rent" => with_session(&user, |u| rent(&state, u, arg)),
            "return" => with_session(&user, |u| return_rental(&state, u, arg)),
            "rentals" => with_session(&user, |u| show_rentals(&state, u)),
            "recommend" => with_session(&user, |u| recommend(&state, u)),
            "popular" => show_popular(&state),
            "quit" | "exit" => break,
            other => println!("Unknown command '{other}'. Type 'help' for commands."),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  signup           register a new account");
    println!("  login            log in by email");
    println!("  logout           end the session");
    println!("  whoami           show the session user");
    println!("  catalog          list all books");
    println!("  rent <book-id>   rent one copy");
    println!("  return <book-id> return a rented copy");
    println!("  rentals          list your rentals");
    println!("  recommend        picks for you");
    println!("  popular          best available books");
    println!("  quit             exit");
}

fn with_session(user: &Option<User>, action: impl FnOnce(&User)) {
    match user {
        Some(u) => action(u),
        None => println!("Please login or signup first."),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().lock().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

fn signup_prompt(state: &AppState) -> Result<User, Box<dyn std::error::Error>> {
    let name = prompt("Full name")?;
    let email = prompt("Email")?;
    // Captured for parity with the signup form; never stored or checked
    let _password = prompt("Password")?;
    println!("Genres: {}", GENRES.join(", "));
    let raw = prompt("Preferences (comma-separated, empty for all)")?;
    let preferences = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    let user = session_service::signup(
        state,
        NewUser {
            name,
            email,
            preferences,
        },
    )?;
    Ok(user)
}

fn login_prompt(state: &AppState) -> Result<User, Box<dyn std::error::Error>> {
    let email = prompt("Email")?;
    let password = prompt("Password")?;
    let user = session_service::login(state, &email, &password)?;
    Ok(user)
}

fn show_catalog(state: &AppState) {
    match state.catalog.get_all() {
        Ok(books) => {
            for b in books {
                println!(
                    "[{}] {} - {} ({}) {:.1}* {}/{} available",
                    b.id, b.title, b.author, b.genre, b.rating, b.available_copies, b.total_copies
                );
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn rent(state: &AppState, user: &User, arg: Option<&str>) {
    let Some(book_id) = arg else {
        println!("Usage: rent <book-id>");
        return;
    };
    match rental_service::rent_book(state, &user.id, book_id) {
        Ok(rental) => println!(
            "Rented. Due back {}.",
            rental.due_date.format("%Y-%m-%d")
        ),
        Err(e) => println!("{e}"),
    }
}

fn return_rental(state: &AppState, user: &User, arg: Option<&str>) {
    let Some(book_id) = arg else {
        println!("Usage: return <book-id>");
        return;
    };
    match rental_service::return_book(state, &user.id, book_id) {
        Ok(Some(_)) => println!("Returned. Thank you!"),
        Ok(None) => println!("No active rental for that book."),
        Err(e) => println!("{e}"),
    }
}

fn show_rentals(state: &AppState, user: &User) {
    match rental_service::rentals_for_user(state, &user.id) {
        Ok(rentals) if rentals.is_empty() => println!("No rentals yet."),
        Ok(rentals) => {
            let now = chrono::Utc::now();
            for r in rentals {
                println!(
                    "book {} rented {} due {} [{:?}]",
                    r.book_id,
                    r.rented_at.format("%Y-%m-%d"),
                    r.due_date.format("%Y-%m-%d"),
                    r.status_at(now)
                );
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn recommend(state: &AppState, user: &User) {
    match recommendation_service::recommendations_for(state, user) {
        Ok(books) if books.is_empty() => println!("Nothing left to recommend!"),
        Ok(books) => {
            for b in books {
                println!("[{}] {} - {} ({}) {:.1}*", b.id, b.title, b.author, b.genre, b.rating);
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn show_popular(state: &AppState) {
    match recommendation_service::popular_books(state) {
        Ok(books) => {
            for b in books {
                println!("[{}] {} - {} {:.1}*", b.id, b.title, b.author, b.rating);
            }
        }
        Err(e) => println!("{e}"),
    }
}
