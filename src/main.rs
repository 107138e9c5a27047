//! Phonebook - interactive console front-end.
//!
//! Reads menu commands from stdin and prints results to stdout. Logs go to
//! stderr so they never interleave with prompts.

use anyhow::Result;
use phonebook::domain::ContactForm;
use phonebook::{Config, ContactBook, SortField};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const MENU: &str = "
=== PHONEBOOK ===
1) Load from file
2) Save to file
3) List contacts
4) Add contact
5) Delete contact
6) Search
7) Sort by last name
8) Sort by birth date
0) Exit
> ";

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep the prompt clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using contacts file {}", config.file_path.display());

    let mut book = ContactBook::new();
    if config.autoload {
        match ContactBook::load_from_file(&config.file_path) {
            Ok(loaded) => book = loaded,
            Err(e) => error!("Initial load failed: {}", e),
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;

        let Some(cmd) = read_line(&mut input)? else {
            break;
        };

        match cmd.trim() {
            "0" => break,
            "1" => match ContactBook::load_from_file(&config.file_path) {
                Ok(loaded) => {
                    book = loaded;
                    writeln!(out, "Loaded {} contacts.", book.len())?;
                }
                Err(e) => writeln!(out, "Load failed: {}", e)?,
            },
            "2" => match book.save_to_file(&config.file_path) {
                Ok(()) => writeln!(out, "Saved.")?,
                Err(e) => writeln!(out, "Save failed: {}", e)?,
            },
            "3" => {
                for (i, contact) in book.iter().enumerate() {
                    print_contact(&mut out, i, contact)?;
                }
            }
            "4" => {
                let Some(form) = read_form(&mut input, &mut out)? else {
                    break;
                };
                match form.into_contact() {
                    Ok(contact) => {
                        book.add(contact);
                        writeln!(out, "Added.")?;
                    }
                    Err(errors) => {
                        for e in errors {
                            writeln!(out, "ERROR: {}", e)?;
                        }
                    }
                }
            }
            "5" => {
                let Some(raw) = prompt(&mut input, &mut out, "Index to delete: ")? else {
                    break;
                };
                let name = raw
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|idx| book.get(idx).map(|c| (idx, c.full_name())));
                match name {
                    Some((idx, name)) => {
                        book.remove(idx);
                        writeln!(out, "Deleted {}.", name)?;
                    }
                    None => writeln!(out, "No such index.")?,
                }
            }
            "6" => {
                let Some(query) = prompt(&mut input, &mut out, "Search text: ")? else {
                    break;
                };
                let hits = book.find(&query);
                for &idx in &hits {
                    if let Some(contact) = book.get(idx) {
                        print_contact(&mut out, idx, contact)?;
                    }
                }
                writeln!(out, "Found: {}", hits.len())?;
            }
            "7" => {
                book.sort_by(SortField::LastName, true);
                writeln!(out, "Sorted.")?;
            }
            "8" => {
                book.sort_by(SortField::BirthDate, true);
                writeln!(out, "Sorted.")?;
            }
            other => writeln!(out, "Unknown command: {}", other)?,
        }
    }

    info!("Phonebook console exiting");
    Ok(())
}

/// Read one line without its terminator; `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    read_line(input)
}

fn read_form(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<ContactForm>> {
    let mut fields = Vec::with_capacity(8);
    for label in [
        "Last name*: ",
        "First name*: ",
        "Middle name: ",
        "Address: ",
        "Birth date (yyyy-mm-dd)*: ",
        "Email*: ",
        "Phone*: ",
        "Phone type (mobile/home/work/other): ",
    ] {
        match prompt(input, out, label)? {
            Some(value) => fields.push(value),
            None => return Ok(None),
        }
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    Ok(Some(ContactForm {
        last_name: next(),
        first_name: next(),
        middle_name: next(),
        address: next(),
        birth_date: next(),
        email: next(),
        phone: next(),
        phone_type: next(),
    }))
}

fn print_contact(out: &mut impl Write, index: usize, contact: &phonebook::Contact) -> io::Result<()> {
    writeln!(out, "----------------------------------------")?;
    writeln!(out, "#{}", index)?;
    writeln!(out, "{}", contact)
}
