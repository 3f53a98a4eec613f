//! Interactive shell over the queue store.
//!
//! One command per line, clap-parsed. The "who was called" pointer lives
//! here, not in the store: calling next is a read, and the shell decides
//! when the called guest is actually served and removed.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::json;
use tabled::{Table, Tabled};

use waitline_core::application::{CreateQueueRequest, QueueStore};
use waitline_core::domain::{wait, PersonId, Queue, QueueCode};

#[derive(Parser)]
#[command(multicall = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand)]
enum ReplCommand {
    /// Create a queue and start hosting it
    Create {
        /// Queue name (may span several words)
        name: Vec<String>,

        /// Estimated minutes of service per person
        #[arg(long, short = 't')]
        time_per_person: Option<u32>,

        #[arg(long, short = 'd')]
        description: Option<String>,

        #[arg(long, short = 'l')]
        location: Option<String>,
    },

    /// List every queue this session knows about
    Queues,

    /// Join a queue by its 6-character code
    Join {
        code: String,

        /// Your display name (may span several words)
        name: Vec<String>,

        /// Contact info to leave with the host
        #[arg(long, short = 'c')]
        contact: Option<String>,
    },

    /// Leave the queue you joined
    Leave,

    /// Your place in line and estimated wait
    Status,

    /// Host view of your queue
    Manage,

    /// Call the next guest (they stay in line until served)
    Next,

    /// Mark the called guest as served and remove them
    Serve,

    /// Remove a guest by position or id
    Remove { target: String },

    /// Move the listed guests (by position or id) to the front, in order
    Reorder { targets: Vec<String> },

    /// End your queue permanently
    End,

    /// JSON snapshot of the store
    Dump,

    /// Exit the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Tabled)]
struct QueueRow {
    code: String,
    name: String,
    status: String,
    waiting: usize,
    #[tabled(rename = "min/person")]
    rate: u32,
}

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "#")]
    position: String,
    name: String,
    #[tabled(rename = "joined (UTC)")]
    joined: String,
    contact: String,
}

pub fn run(store: &mut QueueStore) -> Result<()> {
    println!("{}", "Waitline - walk-in waitlist".cyan().bold());
    println!("Type a command, or an unknown one to see the list. 'quit' leaves.");

    // Presentation-layer pointer: the guest most recently called with
    // `next`, to be removed by `serve`
    let mut called: Option<PersonId> = None;

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parsed = ReplLine::try_parse_from(line.split_whitespace());
        let command = match parsed {
            Ok(repl) => repl.command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ReplCommand::Quit => break,
            ReplCommand::Create {
                name,
                time_per_person,
                description,
                location,
            } => create(store, name.join(" "), time_per_person, description, location),
            ReplCommand::Queues => queues(store),
            ReplCommand::Join {
                code,
                name,
                contact,
            } => join(store, &code, name.join(" "), contact),
            ReplCommand::Leave => leave(store),
            ReplCommand::Status => status(store),
            ReplCommand::Manage => manage(store, called.as_ref()),
            ReplCommand::Next => next(store, &mut called),
            ReplCommand::Serve => serve(store, &mut called),
            ReplCommand::Remove { target } => remove(store, &target, &mut called),
            ReplCommand::Reorder { targets } => reorder(store, &targets),
            ReplCommand::End => end(store, &mut called),
            ReplCommand::Dump => dump(store),
        }
    }

    println!("{}", "Bye.".dimmed());
    Ok(())
}

fn create(
    store: &mut QueueStore,
    name: String,
    time_per_person: Option<u32>,
    description: Option<String>,
    location: Option<String>,
) {
    let code = store.create_queue(CreateQueueRequest {
        name: if name.is_empty() { None } else { Some(name) },
        description,
        location,
        time_per_person,
    });
    // Unwrap is safe: the queue was appended just above
    let queue = store.queue(&code).expect("created queue must exist");

    println!("  {} {}", "✓".green(), "Queue created".bold());
    println!("  {} {}", "Name:".bold(), queue.name);
    println!(
        "  {} {}  {}",
        "Code:".bold(),
        code.to_string().yellow().bold(),
        "(share this with your guests)".dimmed()
    );
}

fn queues(store: &QueueStore) {
    if store.queues().is_empty() {
        println!("  No queues yet. Use {} to start one.", "create <name>".bold());
        return;
    }
    let rows: Vec<QueueRow> = store
        .queues()
        .iter()
        .map(|q| QueueRow {
            code: q.id.to_string(),
            name: q.name.clone(),
            status: if q.is_active {
                "active".green().to_string()
            } else {
                "ended".red().to_string()
            },
            waiting: q.people.len(),
            rate: q.time_per_person,
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn join(store: &mut QueueStore, code: &str, name: String, contact: Option<String>) {
    let code = match QueueCode::from_str(code) {
        Ok(code) => code,
        Err(e) => {
            println!("  {} {}", "✗".red(), e);
            return;
        }
    };
    if name.trim().is_empty() {
        println!("  {} Please enter your name.", "✗".red());
        return;
    }

    if store.join_queue(&code, name.trim(), contact.filter(|c| !c.is_empty())) {
        let queue = store.current_queue().expect("joined queue must exist");
        let position = store.user_position().unwrap_or(queue.people.len());
        println!("  {} Joined {}", "✓".green(), queue.name.bold());
        println!("  {} {}", "Position:".bold(), position);
        println!(
            "  {} {}",
            "Estimated wait:".bold(),
            wait::format_wait_time(wait::estimated_wait_minutes(position, queue.time_per_person))
        );
    } else {
        println!(
            "  {} Could not join the queue. It may no longer be active, or your name may already be in it.",
            "✗".red()
        );
    }
}

fn leave(store: &mut QueueStore) {
    let Some((code, person_id)) = own_membership(store) else {
        println!("  You're not in a queue.");
        return;
    };
    store.leave_queue(&code, &person_id);
    println!("  {} You left the queue.", "✓".green());
}

fn status(store: &QueueStore) {
    let Some(queue) = store.current_queue() else {
        println!(
            "  You're not in a queue. Use {} to join one.",
            "join <code> <name>".bold()
        );
        return;
    };
    let Some(position) = store.user_position() else {
        // Name no longer present: the host removed us
        println!("  You're no longer in {}.", queue.name.bold());
        return;
    };

    let minutes = wait::estimated_wait_minutes(position, queue.time_per_person);
    let eta = wait::estimated_service_time(chrono::Utc::now(), position, queue.time_per_person);

    println!("  {} {}", "Queue:".bold(), queue.name);
    if !queue.is_active {
        println!("  {} {}", "Status:".bold(), "ended".red());
    }
    println!(
        "  {} {}  {}",
        "Position:".bold(),
        position,
        wait::position_text(position).cyan()
    );
    println!(
        "  {} {}",
        "Estimated wait:".bold(),
        wait::format_wait_time(minutes)
    );
    println!(
        "  {} around {}",
        "Your turn:".bold(),
        eta.format("%H:%M UTC")
    );
}

fn manage(store: &QueueStore, called: Option<&PersonId>) {
    let Some(queue) = store.active_host_queue() else {
        println!(
            "  You're not hosting a queue. Use {} to start one.",
            "create <name>".bold()
        );
        return;
    };

    println!(
        "  {} {}  {} {}",
        "Queue:".bold(),
        queue.name,
        "Code:".bold(),
        queue.id.to_string().yellow().bold()
    );
    if queue.people.is_empty() {
        println!("  Nobody waiting.");
        return;
    }

    let rows: Vec<PersonRow> = queue
        .people
        .iter()
        .enumerate()
        .map(|(idx, p)| PersonRow {
            position: if Some(&p.id) == called {
                format!("{} {}", idx + 1, "(called)".cyan())
            } else {
                (idx + 1).to_string()
            },
            name: p.name.clone(),
            joined: p.joined_at.format("%H:%M:%S").to_string(),
            contact: p.contact_info.clone().unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn next(store: &QueueStore, called: &mut Option<PersonId>) {
    let Some(queue) = store.active_host_queue() else {
        println!("  You're not hosting a queue.");
        return;
    };
    match store.call_next(&queue.id) {
        Some(person) => {
            println!(
                "  {} {} has been notified that it's their turn.",
                "✓".green(),
                person.name.bold()
            );
            println!(
                "  They stay in line until you run {} or {}.",
                "serve".bold(),
                "remove 1".bold()
            );
            *called = Some(person.id);
        }
        None => println!("  There are no more people in the queue."),
    }
}

fn serve(store: &mut QueueStore, called: &mut Option<PersonId>) {
    let Some(queue) = store.active_host_queue() else {
        println!("  You're not hosting a queue.");
        return;
    };
    let code = queue.id.clone();
    let Some(person_id) = called.take() else {
        println!("  Nobody has been called. Use {} first.", "next".bold());
        return;
    };
    store.remove_person(&code, &person_id);
    println!("  {} Served and removed from the queue.", "✓".green());
}

fn remove(store: &mut QueueStore, target: &str, called: &mut Option<PersonId>) {
    let Some(queue) = store.active_host_queue() else {
        println!("  You're not hosting a queue.");
        return;
    };
    let Some(person_id) = resolve_person(queue, target) else {
        println!("  {} No guest matches {:?}.", "✗".red(), target);
        return;
    };
    let code = queue.id.clone();
    store.remove_person(&code, &person_id);
    if called.as_ref() == Some(&person_id) {
        *called = None;
    }
    println!("  {} Removed.", "✓".green());
}

fn reorder(store: &mut QueueStore, targets: &[String]) {
    let Some(queue) = store.active_host_queue() else {
        println!("  You're not hosting a queue.");
        return;
    };
    let code = queue.id.clone();

    // Resolve positions against the order before any move
    let mut ordered_ids = Vec::with_capacity(targets.len());
    for target in targets {
        match resolve_person(queue, target) {
            Some(id) => ordered_ids.push(id),
            None => {
                println!("  {} No guest matches {:?}.", "✗".red(), target);
                return;
            }
        }
    }

    store.reorder_queue(&code, &ordered_ids);
    println!("  {} Queue reordered.", "✓".green());
}

fn end(store: &mut QueueStore, called: &mut Option<PersonId>) {
    let Some(queue) = store.active_host_queue() else {
        println!("  You're not hosting a queue.");
        return;
    };
    let code = queue.id.clone();
    let name = queue.name.clone();
    store.end_queue(&code);
    *called = None;
    println!(
        "  {} {} has ended. The code {} no longer accepts guests.",
        "✓".green(),
        name.bold(),
        code.to_string().yellow()
    );
}

fn dump(store: &QueueStore) {
    let snapshot = json!({
        "queues": store.queues(),
        "active_host_queue": store.active_host_queue().map(|q| q.id.as_str()),
        "current_queue": store.current_queue().map(|q| q.id.as_str()),
        "user_name": store.user_name(),
    });
    match serde_json::to_string_pretty(&snapshot) {
        Ok(text) => println!("{}", text),
        Err(e) => println!("  {} {}", "✗".red(), e),
    }
}

/// The caller's own membership: joined queue code plus their person id,
/// re-derived by display-name lookup.
fn own_membership(store: &QueueStore) -> Option<(QueueCode, PersonId)> {
    let queue = store.current_queue()?;
    let person = queue.person_by_name(store.user_name()?)?;
    Some((queue.id.clone(), person.id.clone()))
}

/// Accept either a 1-based position or a raw person id.
fn resolve_person(queue: &Queue, target: &str) -> Option<PersonId> {
    if let Ok(position) = target.parse::<usize>() {
        return queue
            .people
            .get(position.checked_sub(1)?)
            .map(|p| p.id.clone());
    }
    queue
        .people
        .iter()
        .find(|p| p.id.as_str() == target)
        .map(|p| p.id.clone())
}
