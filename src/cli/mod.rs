use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use crate::application::{Session, SessionConfig};
use crate::domain::{DEFAULT_BRANCH, NationalId, User, format_cents, parse_cents};

const MENU: &str = "\
---------------------------------
 [d]  Deposit
 [s]  Withdraw
 [e]  Statement
 [nc] Open account
 [nu] Register user
 [ls] List accounts
 [q]  Quit
---------------------------------";

/// Caixa - Interactive Bank Teller
#[derive(Parser)]
#[command(name = "caixa")]
#[command(about = "An interactive in-memory bank teller for the command line")]
#[command(version)]
pub struct Cli {
    /// Branch code stamped on every account
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Per-withdrawal limit (e.g., "500.00" or "500")
    #[arg(long, default_value = "500.00")]
    pub withdrawal_limit: String,

    /// Maximum number of withdrawals per session
    #[arg(long, default_value_t = 3)]
    pub max_withdrawals: u32,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let withdrawal_limit = parse_cents(&self.withdrawal_limit)
            .context("Invalid withdrawal limit. Use '500.00' or '500'")?;

        let mut session = Session::new(SessionConfig {
            branch: self.branch,
            withdrawal_limit,
            max_withdrawals: self.max_withdrawals,
        });

        let stdin = io::stdin();
        run_loop(&mut session, &mut stdin.lock())
    }
}

/// The whole program lifecycle: show the menu, dispatch one command, repeat.
/// `q` or end of input ends the session.
fn run_loop(session: &mut Session, input: &mut impl BufRead) -> Result<()> {
    loop {
        println!("{MENU}");
        let Some(choice) = prompt_line(input, "> ")? else {
            break;
        };

        match choice.to_lowercase().as_str() {
            "d" => run_deposit(session, input)?,
            "s" => run_withdraw(session, input)?,
            "e" => print_statement(session),
            "nc" => run_open_account(session, input)?,
            "nu" => run_register_user(session, input)?,
            "ls" => print_accounts(session),
            "q" => {
                println!("Leaving the teller. Goodbye.");
                break;
            }
            other => println!("Unknown option '{other}'. Pick one of the menu entries."),
        }
    }

    Ok(())
}

fn run_deposit(session: &mut Session, input: &mut impl BufRead) -> Result<()> {
    let Some(raw) = prompt_line(input, "Deposit amount: ")? else {
        return Ok(());
    };

    // Malformed amounts are reported and control returns to the menu.
    let amount = match parse_cents(&raw) {
        Ok(amount) => amount,
        Err(err) => {
            println!("Operation failed: {err}.");
            return Ok(());
        }
    };

    match session.deposit(amount) {
        Ok(balance) => println!(
            "Deposited R$ {}. Balance is now R$ {}.",
            format_cents(amount),
            format_cents(balance)
        ),
        Err(err) => println!("Operation failed: {err}."),
    }
    Ok(())
}

fn run_withdraw(session: &mut Session, input: &mut impl BufRead) -> Result<()> {
    let Some(raw) = prompt_line(input, "Withdrawal amount: ")? else {
        return Ok(());
    };

    let amount = match parse_cents(&raw) {
        Ok(amount) => amount,
        Err(err) => {
            println!("Operation failed: {err}.");
            return Ok(());
        }
    };

    match session.withdraw(amount) {
        Ok(balance) => println!(
            "Withdrew R$ {}. Balance is now R$ {}.",
            format_cents(amount),
            format_cents(balance)
        ),
        Err(err) => println!("Operation failed: {err}."),
    }
    Ok(())
}

fn run_register_user(session: &mut Session, input: &mut impl BufRead) -> Result<()> {
    let Some(national_id) = prompt_national_id(session, input)? else {
        return Ok(());
    };
    let Some(name) = prompt_line(input, "Name: ")? else {
        return Ok(());
    };
    let Some(birth_date) = prompt_birth_date(input)? else {
        return Ok(());
    };
    let Some(street) = prompt_line(input, "Street: ")? else {
        return Ok(());
    };
    let Some(district) = prompt_line(input, "District: ")? else {
        return Ok(());
    };
    let Some(city) = prompt_line(input, "City/state: ")? else {
        return Ok(());
    };

    let address = format!("{street}, {district}, {city}");
    match session.register_user(User::new(name.clone(), national_id, birth_date, address)) {
        Ok(()) => println!("User {name} registered."),
        Err(err) => println!("Operation failed: {err}."),
    }
    Ok(())
}

fn run_open_account(session: &mut Session, input: &mut impl BufRead) -> Result<()> {
    let Some(raw) = prompt_line(input, "National ID: ")? else {
        return Ok(());
    };

    let national_id = match raw.parse::<NationalId>() {
        Ok(id) => id,
        Err(_) => {
            println!("Invalid national ID, enter a numeric value.");
            return Ok(());
        }
    };

    match session.open_account(national_id) {
        Ok(account) => {
            let holder = session
                .find_user(account.holder)
                .map(|u| u.name.as_str())
                .unwrap_or("?");
            println!(
                "Account {} opened at branch {} for {}.",
                account.number, account.branch, holder
            );
        }
        Err(err) => println!("Operation failed: {err}."),
    }
    Ok(())
}

fn print_statement(session: &Session) {
    println!();
    println!("================ Statement ================");
    if session.statement().is_empty() {
        println!("No transactions recorded.");
    } else {
        for entry in session.statement() {
            println!("{entry}");
        }
    }
    println!();
    println!("Balance: R$ {}", format_cents(session.balance()));
    println!("===========================================");
}

fn print_accounts(session: &Session) {
    let accounts = session.accounts();
    if accounts.is_empty() {
        println!("No accounts found.");
        return;
    }

    println!(
        "{:<8} {:<8} {:<14} {:<20}",
        "NUMBER", "BRANCH", "NATIONAL ID", "HOLDER"
    );
    println!("{}", "-".repeat(52));
    for account in accounts {
        let holder = session
            .find_user(account.holder)
            .map(|u| u.name.as_str())
            .unwrap_or("?");
        println!(
            "{:<8} {:<8} {:<14} {:<20}",
            account.number, account.branch, account.holder, holder
        );
    }
}

/// Re-prompt until a numeric national ID not already in the registry is
/// supplied. Returns None on end of input.
fn prompt_national_id(
    session: &Session,
    input: &mut impl BufRead,
) -> Result<Option<NationalId>> {
    loop {
        let Some(raw) = prompt_line(input, "National ID: ")? else {
            return Ok(None);
        };
        match raw.parse::<NationalId>() {
            Ok(id) if session.find_user_index(id).is_some() => {
                println!("A user with this national ID already exists.");
            }
            Ok(id) => return Ok(Some(id)),
            Err(_) => println!("Invalid national ID, enter a numeric value."),
        }
    }
}

/// Re-prompt until the date parses. Returns None on end of input.
fn prompt_birth_date(input: &mut impl BufRead) -> Result<Option<NaiveDate>> {
    loop {
        let Some(raw) = prompt_line(input, "Birth date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("Birth date must be in YYYY-MM-DD format."),
        }
    }
}

/// Print a prompt and read one trimmed line. Returns None on end of input.
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
