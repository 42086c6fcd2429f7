//! Command handlers and the dispatcher that routes parsed input to them.
//!
//! `CommandDispatcher` owns the address book and the snapshot store for the
//! whole session. Every handler returns a reply string; failures are mapped
//! to their fixed user-facing messages at the single dispatch call site, so
//! no command can take the interactive loop down.

use crate::commands::parser::{parse, ParsedCommand, Verb};
use crate::domain::Name;
use crate::error::{CommandError, CommandResult, StorageResult};
use crate::models::{AddressBook, Record};
use crate::storage::SnapshotStore;
use chrono::Local;

/// Banner printed at session start and returned by the `help` command.
pub const HELP_TEXT: &str = r#"Hi! If you want to start working, just enter "hello"
Phone numbers are 10 digits, for example 0001230001
The available commands are:
"hello" - start work with the bot
"add" name phone...
"change" name old_phone new_phone
"phone" name
"show all" - show every saved contact
"search" query - search by name or phone substring
"delete" name - delete a contact
"birthday" name DD.MM.YYYY - save a birthday
"days to birthday" name - days till the next birthday
"save" - write the address book to disk
"help" - show this message
"good bye", "close", "exit" - save and end work"#;

/// Routes input lines to handlers against one address book and one
/// snapshot store.
pub struct CommandDispatcher {
    book: AddressBook,
    store: SnapshotStore,
}

impl CommandDispatcher {
    /// Create a dispatcher over an already-loaded book and its store.
    pub fn new(book: AddressBook, store: SnapshotStore) -> Self {
        Self { book, store }
    }

    /// The address book this dispatcher operates on.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Persist the current book through the snapshot store.
    pub fn save_snapshot(&self) -> StorageResult<()> {
        self.store.save(&self.book)
    }

    /// Process one input line and produce the reply to print.
    ///
    /// Command failures never escape: each error kind is converted to its
    /// fixed message here.
    pub fn dispatch(&mut self, line: &str) -> String {
        let ParsedCommand { verb, args } = parse(line);
        tracing::debug!("Dispatching {:?} with {} argument(s)", verb, args.len());

        let result = match verb {
            Verb::Hello => Ok("How can I help you?".to_string()),
            Verb::Add => self.add(&args),
            Verb::Change => self.change(&args),
            Verb::Phone => self.phone(&args),
            Verb::ShowAll => Ok(self.book.to_string()),
            Verb::Delete => self.delete(&args),
            Verb::Search => self.search(&args),
            Verb::DaysToBirthday => self.days_to_birthday(&args),
            Verb::Birthday => self.birthday(&args),
            Verb::Save => Ok(self.save()),
            Verb::Help => Ok(HELP_TEXT.to_string()),
            Verb::Unknown => Ok("Unknown command. Try again.".to_string()),
        };

        match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::debug!("Command rejected: {}", err);
                err.user_message().to_string()
            }
        }
    }

    /// `add <name> <phone...>`: create (or overwrite) a record and attach
    /// every trailing token as a phone. A contact with no phones is legal.
    fn add(&mut self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingArgument("name"))?;

        let mut record = Record::new(Name::new(name.as_str())?);
        for phone in &args[1..] {
            record.add_phone(phone.as_str())?;
        }

        self.book.add_record(record);
        Ok("Info saved successfully.".to_string())
    }

    /// `change <name> <old> <new>`: replace one phone on an existing record.
    fn change(&mut self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
        let old = args.get(1).ok_or(CommandError::MissingArgument("old phone"))?;
        let new = args.get(2).ok_or(CommandError::MissingArgument("new phone"))?;

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| CommandError::NoSuchEntry(name.clone()))?;
        record.edit_phone(old, new)?;

        Ok(format!("Number {} for {} changed to {}", old, name, new))
    }

    /// `phone <name>`: the record's display string; absence is a lookup error.
    fn phone(&self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingArgument("name"))?;

        let record = self
            .book
            .find(name)
            .ok_or_else(|| CommandError::NoSuchEntry(name.clone()))?;
        Ok(record.to_string())
    }

    /// `delete <name>`: absence is a normal reply, not an error.
    fn delete(&mut self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingArgument("name"))?;

        match self.book.delete(name) {
            Some(_) => Ok(format!("User {} has been deleted from the phone book", name)),
            None => Ok(format!("User {} is not in the address book", name)),
        }
    }

    /// `search <query>`: substring search over phones and names. Only the
    /// first token is the query.
    fn search(&self, args: &[String]) -> CommandResult<String> {
        let query = args.first().ok_or(CommandError::MissingArgument("query"))?;

        let matches = self.book.search_contact(query);
        if matches.is_empty() {
            Ok(format!("No contacts found for query: {}", query))
        } else {
            let rendered: Vec<String> = matches.iter().map(|r| r.to_string()).collect();
            Ok(format!("Matching contacts: \n{}", rendered.join("\n")))
        }
    }

    /// `birthday <name> <DD.MM.YYYY>`: set or replace the record's birthday.
    fn birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingArgument("name"))?;
        let raw = args.get(1).ok_or(CommandError::MissingArgument("birthday"))?;

        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| CommandError::NoSuchEntry(name.clone()))?;
        record.set_birthday(raw.as_str())?;

        let saved = record
            .birthday()
            .map(|b| b.to_string())
            .unwrap_or_default();
        Ok(format!("Birthday for {} saved as {}", name, saved))
    }

    /// `days to birthday <name>`: countdown to the next occurrence, or the
    /// fixed no-birthday reply.
    fn days_to_birthday(&self, args: &[String]) -> CommandResult<String> {
        let name = args.first().ok_or(CommandError::MissingArgument("name"))?;

        let record = self
            .book
            .find(name)
            .ok_or_else(|| CommandError::NoSuchEntry(name.clone()))?;

        let today = Local::now().date_naive();
        match record.days_to_birthday(today) {
            Some(days) => Ok(format!(
                "Days till the next Birthday for {}: {} days",
                name, days
            )),
            None => Ok("Birth date not added".to_string()),
        }
    }

    /// `save`: on-demand snapshot write. Storage failures are reported in
    /// the reply rather than mapped to a command-error message.
    fn save(&self) -> String {
        match self.store.save(&self.book) {
            Ok(()) => format!("Address book saved to {}", self.store.path().display()),
            Err(err) => {
                tracing::error!("On-demand save failed: {}", err);
                format!("Failed to save address book: {}", err)
            }
        }
    }
}
