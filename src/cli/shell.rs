//! Interactive menu loop around a [`Catalog`].
//!
//! The session loads the catalog from its [`Store`] on start, reads one
//! menu choice at a time, and saves on exit. End of input counts as
//! choosing Exit, so a piped session still persists its changes.

use crate::catalog::{
    Catalog, CatalogQuery, CheckoutOutcome, DeleteOutcome, Record, ReturnOutcome,
};
use crate::cli::menu::MenuChoice;
use crate::store::Store;
use crate::Result;
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};

/// Books added when a session starts with an empty catalog
pub const DEMO_BOOKS: [(&str, &str, &str); 2] = [
    ("The Clean Coder", "Robert C. Martin", "978-0137081073"),
    ("Python Crash Course", "Eric Matthes", "978-1593279288"),
];

const BANNER_WIDTH: usize = 40;
const LIST_RULE: &str = "----------------------------------";
const SEARCH_RULE: &str = "---------------------------------------------------------";

/// One operator session: load, menu loop, save
pub struct Session<R, W> {
    catalog: Catalog,
    store: Box<dyn Store>,
    input: R,
    output: W,
    seed_demo: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session that starts from an empty catalog
    pub fn new(store: Box<dyn Store>, input: R, output: W) -> Self {
        Self {
            catalog: Catalog::new(),
            store,
            input,
            output,
            seed_demo: true,
        }
    }

    /// Whether to add [`DEMO_BOOKS`] when the loaded catalog is empty
    pub fn seed_demo(mut self, enabled: bool) -> Self {
        self.seed_demo = enabled;
        self
    }

    /// Run until the operator exits or input ends, then return the catalog
    pub fn run(mut self) -> Result<Catalog> {
        self.load()?;

        if self.seed_demo && self.catalog.is_empty() {
            writeln!(self.output, "\nAdding initial demo books.")?;
            for (title, author, key) in DEMO_BOOKS {
                self.add_record(title, author, key)?;
            }
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice (1-7): ")? else {
                debug!("input closed, exiting");
                writeln!(self.output)?;
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(invalid) => {
                    debug!(input = %invalid.0, "invalid menu choice");
                    writeln!(
                        self.output,
                        "\nInvalid choice. Please enter a number between 1 and 7."
                    )?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit || !self.dispatch(choice)? {
                break;
            }
        }

        self.save()?;
        writeln!(
            self.output,
            "\nThank you for using the Library System. Goodbye!"
        )?;
        self.output.flush()?;
        Ok(self.catalog)
    }

    /// Handle one action. Returns false when input ended mid-action.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::Add => {
                let Some(title) = self.prompt("Enter title: ")? else {
                    return Ok(false);
                };
                let Some(author) = self.prompt("Enter author: ")? else {
                    return Ok(false);
                };
                let Some(key) = self.prompt("Enter ISBN (e.g., 123-456): ")? else {
                    return Ok(false);
                };
                self.add_record(&title, &author, &key)?;
            }
            MenuChoice::List => self.list_records()?,
            MenuChoice::Checkout => {
                let Some(key) = self.prompt("Enter ISBN of book to check out: ")? else {
                    return Ok(false);
                };
                self.checkout(&key)?;
            }
            MenuChoice::Return => {
                let Some(key) = self.prompt("Enter ISBN of book to return: ")? else {
                    return Ok(false);
                };
                self.return_item(&key)?;
            }
            MenuChoice::Search => {
                let Some(query) = self.prompt("Enter title or author to search: ")? else {
                    return Ok(false);
                };
                self.search(&query)?;
            }
            MenuChoice::Delete => {
                let Some(key) = self.prompt("Enter ISBN of book to delete: ")? else {
                    return Ok(false);
                };
                self.delete(&key)?;
            }
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    fn load(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(Some(records)) => {
                self.catalog.replace_all(records);
                writeln!(self.output, "\nDATA: Library data loaded successfully.")?;
            }
            Ok(None) => {
                writeln!(
                    self.output,
                    "\nNOTICE: No existing library data found. Starting fresh."
                )?;
            }
            Err(e) => {
                warn!(path = %self.store.location().display(), error = %e, "load failed");
                writeln!(self.output, "\nERROR: Could not load data. {}", e)?;
            }
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(self.catalog.records()) {
            error!(path = %self.store.location().display(), error = %e, "save failed");
            writeln!(self.output, "\nERROR: Could not save data. {}", e)?;
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "  SIMPLE LIBRARY MANAGEMENT SYSTEM")?;
        writeln!(self.output, "{}", rule)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        writeln!(self.output, "{}", rule)?;
        Ok(())
    }

    /// Print `label` and read one line without its line ending.
    /// `None` means input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn add_record(&mut self, title: &str, author: &str, key: &str) -> Result<()> {
        self.catalog.add(title, author, key);
        writeln!(
            self.output,
            "\nSUCCESS: Book '{}' added to the library.",
            title
        )?;
        Ok(())
    }

    fn list_records(&mut self) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(self.output, "\nThe library is currently empty.")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Current Library Collection ---")?;
        write_numbered(&mut self.output, self.catalog.list_all().iter())?;
        writeln!(self.output, "{}", LIST_RULE)?;
        Ok(())
    }

    fn checkout(&mut self, key: &str) -> Result<()> {
        match self.catalog.checkout(key) {
            CheckoutOutcome::Success { title } => writeln!(
                self.output,
                "\nSUCCESS: Book '{}' has been checked out.",
                title
            )?,
            CheckoutOutcome::AlreadyCheckedOut { title } => writeln!(
                self.output,
                "\nNOTICE: Book '{}' is already checked out.",
                title
            )?,
            CheckoutOutcome::NotFound => self.report_missing(key)?,
        }
        Ok(())
    }

    fn return_item(&mut self, key: &str) -> Result<()> {
        match self.catalog.return_item(key) {
            ReturnOutcome::Success { title } => writeln!(
                self.output,
                "\nSUCCESS: Book '{}' has been returned and is now available.",
                title
            )?,
            ReturnOutcome::AlreadyAvailable { title } => writeln!(
                self.output,
                "\nNOTICE: Book '{}' was already available (not checked out).",
                title
            )?,
            ReturnOutcome::NotFound => self.report_missing(key)?,
        }
        Ok(())
    }

    fn search(&mut self, raw_query: &str) -> Result<()> {
        let query = CatalogQuery::new(raw_query);
        let found = query.filter(self.catalog.list_all());

        if found.is_empty() {
            writeln!(
                self.output,
                "\nNOTICE: No books found matching '{}'.",
                query.needle()
            )?;
            return Ok(());
        }

        writeln!(
            self.output,
            "\n--- Found {} Book(s) matching '{}' ---",
            found.len(),
            query.needle()
        )?;
        write_numbered(&mut self.output, found.into_iter())?;
        writeln!(self.output, "{}", SEARCH_RULE)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match self.catalog.delete(key) {
            DeleteOutcome::Success { title } => writeln!(
                self.output,
                "\nSUCCESS: Book '{}' (ISBN: {}) has been deleted.",
                title,
                key.trim()
            )?,
            DeleteOutcome::NotFound => writeln!(
                self.output,
                "\nERROR: Book with ISBN '{}' not found in the library. Nothing was deleted.",
                key.trim()
            )?,
        }
        Ok(())
    }

    fn report_missing(&mut self, key: &str) -> Result<()> {
        writeln!(
            self.output,
            "\nERROR: Book with ISBN '{}' not found in the library.",
            key.trim()
        )?;
        Ok(())
    }
}

fn write_numbered<'a, W: Write>(
    output: &mut W,
    records: impl Iterator<Item = &'a Record>,
) -> Result<()> {
    for (index, record) in records.enumerate() {
        writeln!(output, "[{}] {}", index + 1, record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonFileStore;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(temp_dir: &TempDir, script: &str, seed_demo: bool) -> (Catalog, String) {
        let store = JsonFileStore::new(temp_dir.path().join("library_data.json"));
        let mut output = Vec::new();
        let catalog = Session::new(Box::new(store), Cursor::new(script.to_string()), &mut output)
            .seed_demo(seed_demo)
            .run()
            .unwrap();
        (catalog, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_fresh_start_seeds_demo_books() {
        let temp_dir = TempDir::new().unwrap();
        let (catalog, output) = run_session(&temp_dir, "7\n", true);

        assert!(output.contains("NOTICE: No existing library data found. Starting fresh."));
        assert!(output.contains("Adding initial demo books."));
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list_all()[0].title(), "The Clean Coder");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_no_demo_lists_empty_library() {
        let temp_dir = TempDir::new().unwrap();
        let (catalog, output) = run_session(&temp_dir, "2\n7\n", false);

        assert!(catalog.is_empty());
        assert!(output.contains("The library is currently empty."));
        assert!(!output.contains("Adding initial demo books."));
    }

    #[test]
    fn test_add_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\nDune\nFrank Herbert\n111\n2\n7\n";
        let (catalog, output) = run_session(&temp_dir, script, false);

        assert_eq!(catalog.len(), 1);
        assert!(output.contains("SUCCESS: Book 'Dune' added to the library."));
        assert!(output.contains("--- Current Library Collection ---"));
        assert!(output.contains("[1] \"Dune\" by Frank Herbert (ISBN: 111) (Available)"));
    }

    #[test]
    fn test_checkout_and_return_messages() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\nDune\nFrank Herbert\n111\n3\n111\n3\n 111 \n4\n111\n4\n111\n3\n999\n7\n";
        let (catalog, output) = run_session(&temp_dir, script, false);

        assert!(output.contains("SUCCESS: Book 'Dune' has been checked out."));
        assert!(output.contains("NOTICE: Book 'Dune' is already checked out."));
        assert!(output.contains("SUCCESS: Book 'Dune' has been returned and is now available."));
        assert!(output.contains("NOTICE: Book 'Dune' was already available (not checked out)."));
        assert!(output.contains("ERROR: Book with ISBN '999' not found in the library."));
        assert!(catalog.find_by_key("111").unwrap().is_available());
    }

    #[test]
    fn test_search_messages() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\nFoundation\nIsaac Asimov\n222\n5\n  ASIMOV \n5\nzzz\n7\n";
        let (_catalog, output) = run_session(&temp_dir, script, false);

        assert!(output.contains("--- Found 1 Book(s) matching 'asimov' ---"));
        assert!(output.contains("[1] \"Foundation\" by Isaac Asimov (ISBN: 222) (Available)"));
        assert!(output.contains("NOTICE: No books found matching 'zzz'."));
    }

    #[test]
    fn test_delete_messages() {
        let temp_dir = TempDir::new().unwrap();
        let script = "1\nDune\nFrank Herbert\n111\n6\n999\n6\n111\n7\n";
        let (catalog, output) = run_session(&temp_dir, script, false);

        assert!(output.contains(
            "ERROR: Book with ISBN '999' not found in the library. Nothing was deleted."
        ));
        assert!(output.contains("SUCCESS: Book 'Dune' (ISBN: 111) has been deleted."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_choice() {
        let temp_dir = TempDir::new().unwrap();
        let (_catalog, output) = run_session(&temp_dir, "9\nhello\n7\n", false);

        assert_eq!(
            output
                .matches("Invalid choice. Please enter a number between 1 and 7.")
                .count(),
            2
        );
    }

    #[test]
    fn test_end_of_input_still_saves() {
        let temp_dir = TempDir::new().unwrap();
        let (_catalog, output) = run_session(&temp_dir, "1\nDune\nFrank Herbert\n111\n", false);
        assert!(output.contains("Goodbye!"));

        let (catalog, output) = run_session(&temp_dir, "", false);
        assert!(output.contains("DATA: Library data loaded successfully."));
        assert_eq!(catalog.find_by_key("111").unwrap().title(), "Dune");
    }

    #[test]
    fn test_end_of_input_mid_action() {
        let temp_dir = TempDir::new().unwrap();
        let (catalog, output) = run_session(&temp_dir, "1\nDune\n", false);

        assert!(catalog.is_empty());
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_corrupt_data_starts_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("library_data.json"), "{ broken").unwrap();

        let (catalog, output) = run_session(&temp_dir, "7\n", false);
        assert!(output.contains("ERROR: Could not load data."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the data file should be makes every save fail
        let data_path = temp_dir.path().join("library_data.json");
        std::fs::create_dir(&data_path).unwrap();

        let store = JsonFileStore::new(data_path);
        let mut output = Vec::new();
        Session::new(Box::new(store), Cursor::new("7\n".to_string()), &mut output)
            .seed_demo(false)
            .run()
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("ERROR: Could not save data."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_menu_lists_seven_actions() {
        let temp_dir = TempDir::new().unwrap();
        let (_catalog, output) = run_session(&temp_dir, "7\n", false);

        assert!(output.contains("  SIMPLE LIBRARY MANAGEMENT SYSTEM"));
        for choice in MenuChoice::ALL {
            assert!(output.contains(&choice.to_string()));
        }
    }
}
