//! Address Book - demonstration entry point.
//!
//! Builds a small address book from fixed sample contacts, runs every
//! operation against it and prints the results to stdout. Logs go to stderr.

use address_book::{AddressBook, Config, Contact, ContactUpdate, OutputFormat, ValidationError};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // RUST_LOG wins over LOG_LEVEL when both are set
    let level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Output format: {}", config.output_format);

    if let Err(e) = run(&config) {
        error!("Address book demo aborted: {}", e);
        return Err(e);
    }

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let format = config.output_format;

    println!("========= ADDRESS BOOK APPLICATION =========");

    let mut book = AddressBook::new();
    for contact in sample_contacts()? {
        book.add_contact(contact)?;
    }
    println!("\n Contacts added successfully!\n");

    book.edit_contact(
        "Uday",
        "Kourav",
        ContactUpdate::new().phone("9999999999").address("456 New St"),
    )?;
    println!(" Contact updated: Uday Kourav's phone and address modified.\n");

    if book.delete_contact("John", "Kourav").is_some() {
        println!(" Contact deleted: John Kourav removed from the Address Book.\n");
    } else {
        println!(" Contact John Kourav not found.\n");
    }

    println!(" Search Results:");
    println!(
        "- Search by City (Bhopal): {}",
        render_contacts(&book.search_by_city("Bhopal"), format)?
    );
    println!(
        "- Search by State (MadhyaPradesh): {}\n",
        render_contacts(&book.search_by_state("MadhyaPradesh"), format)?
    );

    println!(" View Results:");
    println!(
        "- Persons in Bhopal: {}",
        render_names(&book.view_by_city("Bhopal"), format)?
    );
    println!(
        "- Persons in MadhyaPradesh: {}\n",
        render_names(&book.view_by_state("MadhyaPradesh"), format)?
    );

    println!(" Count Results:");
    println!("- Count in Bhopal: {}", book.get_count_by_city("Bhopal"));
    println!(
        "- Count in MadhyaPradesh: {}\n",
        book.get_count_by_state("MadhyaPradesh")
    );

    println!(" Sorting Address Book:");
    println!(
        "- Sorted by Name: {}",
        render_contacts(&book.sort_by_name(), format)?
    );
    println!(
        "- Sorted by City: {}",
        render_contacts(&book.sort_by_city(), format)?
    );
    println!(
        "- Sorted by State: {}",
        render_contacts(&book.sort_by_state(), format)?
    );
    println!(
        "- Sorted by Zip Code: {}\n",
        render_contacts(&book.sort_by_zip(), format)?
    );

    println!(" FINAL ADDRESS BOOK:");
    println!("{}", book.display_contacts());

    println!("\n Total Contacts: {}", book.get_contact_count());
    println!("\n========= END OF PROGRAM =========");

    Ok(())
}

fn sample_contacts() -> Result<Vec<Contact>, ValidationError> {
    Ok(vec![
        Contact::new(
            "Uday",
            "Kourav",
            "123 Main St",
            "Bhopal",
            "MadhyaPradesh",
            "462001",
            "9876543210",
            "uday@example.com",
        )?,
        Contact::new(
            "John",
            "Kourav",
            "456 Park Ave",
            "Indore",
            "MadhyaPradesh",
            "452001",
            "9876543211",
            "john@example.com",
        )?,
        Contact::new(
            "Ankit",
            "Kourav",
            "122 Main St",
            "Kareli",
            "MadhyaPradesh",
            "472001",
            "9876545210",
            "ankit@example.com",
        )?,
        Contact::new(
            "Bhupendra",
            "Kourav",
            "451 Park Ave",
            "Imaliya",
            "MadhyaPradesh",
            "482001",
            "9879543211",
            "bhupendra@example.com",
        )?,
    ])
}

/// Render a contact listing on the lines following its label.
fn render_contacts(contacts: &[&Contact], format: OutputFormat) -> Result<String> {
    if contacts.is_empty() {
        return Ok("(none)".to_string());
    }
    match format {
        OutputFormat::Text => Ok(contacts
            .iter()
            .fold(String::new(), |out, c| format!("{}\n{}", out, c))),
        OutputFormat::Json => Ok(format!("\n{}", serde_json::to_string_pretty(contacts)?)),
    }
}

fn render_names(names: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("[{}]", names.join(", "))),
        OutputFormat::Json => Ok(serde_json::to_string(names)?),
    }
}
