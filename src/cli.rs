//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::IpAddr;

use crate::error::HostsError;
use crate::hosts::HostsFile;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version)]
#[command(about = "Simple hosts file management")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that each host is mapped to the given IP
    Check {
        ip: String,
        #[arg(required = true)]
        hosts: Vec<String>,
    },

    /// Map hosts to an IP; merges into an existing entry for that IP
    Add {
        ip: String,
        #[arg(required = true)]
        hosts: Vec<String>,
    },

    /// Print hosts file entries, followed by a total count
    List {
        /// Include comment lines
        #[arg(long)]
        all: bool,
    },

    /// Remove by IP, by hostname, or specific hosts from one IP's entry
    #[command(visible_alias = "remove")]
    Rm {
        /// Single IP or hostname, or an IP followed by hostnames
        #[arg(required = true)]
        args: Vec<String>,
    },
}

/// Run the CLI and return the process exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    let mut store = HostsFile::load_default()?;

    match cli.command {
        Commands::Check { ip, hosts } => cmd_check(&store, &ip, &hosts),
        Commands::Add { ip, hosts } => cmd_add(&mut store, &ip, &hosts),
        Commands::List { all } => cmd_list(&store, all),
        Commands::Rm { args } => cmd_remove(&mut store, &args),
    }
}

fn cmd_check(store: &HostsFile, ip: &str, hosts: &[String]) -> Result<i32> {
    let mut missing = false;
    for host in hosts {
        if !store.has(ip, host) {
            eprintln!("{ip} {host} is not in the hosts file");
            missing = true;
        }
    }
    Ok(if missing { 1 } else { 0 })
}

fn cmd_add(store: &mut HostsFile, ip: &str, hosts: &[String]) -> Result<i32> {
    if !store.is_writable() {
        eprintln!("Hosts file not writable. Try running with elevated privileges.");
        return Ok(1);
    }
    if let Err(e) = store.add(ip, hosts) {
        eprintln!("{e}");
        return Ok(2);
    }
    store.flush()?;
    Ok(0)
}

fn cmd_list(store: &HostsFile, all: bool) -> Result<i32> {
    let mut total = 0;
    for line in &store.lines {
        if line.is_comment() && !all {
            continue;
        }
        if line.is_malformed() {
            println!("{} # <<< Malformed!", line.raw);
        } else {
            println!("{}", line.raw);
        }
        total += 1;
    }
    println!();
    println!("Total: {total}");
    Ok(0)
}

fn cmd_remove(store: &mut HostsFile, args: &[String]) -> Result<i32> {
    if !store.is_writable() {
        eprintln!("Hosts file not writable. Try running with elevated privileges.");
        return Ok(1);
    }
    if let Err(e) = apply_removal(store, args) {
        eprintln!("{e}");
        return Ok(2);
    }
    store.flush()?;
    Ok(0)
}

/// A single argument removes whatever it names: an IP drops that whole
/// entry, anything else is stripped as a hostname wherever it appears.
/// With more arguments the first must be an IP and the rest are hostnames
/// to strip from that IP's entry.
fn apply_removal(store: &mut HostsFile, args: &[String]) -> Result<(), HostsError> {
    if let [arg] = args {
        if arg.parse::<IpAddr>().is_ok() {
            store.remove_by_ip(arg)?;
        } else {
            store.remove_by_hostname(arg);
        }
        return Ok(());
    }

    let ip = &args[0];
    let mut names: Vec<String> = Vec::new();
    for h in &args[1..] {
        if !names.contains(h) {
            names.push(h.clone());
        }
    }
    store.remove(ip, &names)
}
