//! Handlers for `x42ctl address-book`.

use crate::adapter::inbound::cli::command::AddressBookCommand;
use crate::adapter::inbound::cli::{output, watch};
use crate::adapter::outbound::daemon::dto::response::AddressBook;
use crate::adapter::outbound::daemon::DaemonClient;
use crate::domain::AddressLabel;
use crate::error::Result;

pub async fn execute(client: &DaemonClient, command: AddressBookCommand) -> Result<()> {
    match command {
        AddressBookCommand::List(args) if args.watch => {
            watch::follow(client.watch_address_book(), "address_book", |book: &AddressBook| {
                output::tick(
                    &watch::now_label(),
                    "address-book",
                    &format!("{} entries", book.addresses.len()),
                );
            })
            .await
        }
        AddressBookCommand::List(_) => {
            let book = client.address_book().await?;
            output::record("address_book", &book, render_book);
            Ok(())
        }
        AddressBookCommand::Add { label, address } => {
            let added = client
                .add_address_book_address(&AddressLabel::new(label, address))
                .await?;
            output::record("address_added", &added, |entry| {
                output::success(&format!("Added {}", entry.label));
            });
            Ok(())
        }
        AddressBookCommand::Remove { label } => {
            let removed = client.remove_address_book_address(&label).await?;
            output::record("address_removed", &removed, |entry| {
                output::success(&format!("Removed {} ({})", entry.label, entry.address));
            });
            Ok(())
        }
    }
}

fn render_book(book: &AddressBook) {
    output::section("Address book");
    if book.addresses.is_empty() {
        output::note("No entries");
    }
    for entry in &book.addresses {
        output::field(&entry.label, &entry.address);
    }
}
