use std::fmt;
use std::str::FromStr;

/// One of the seven actions offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Checkout,
    Return,
    Search,
    Delete,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Checkout,
        MenuChoice::Return,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Number the operator types to pick this action
    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::List => 2,
            MenuChoice::Checkout => 3,
            MenuChoice::Return => 4,
            MenuChoice::Search => 5,
            MenuChoice::Delete => 6,
            MenuChoice::Exit => 7,
        }
    }

    /// Menu line label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add New Book",
            MenuChoice::List => "Display All Books",
            MenuChoice::Checkout => "Check Out Book (by ISBN)",
            MenuChoice::Return => "Return Book (by ISBN)",
            MenuChoice::Search => "Search Book (by Title/Author)",
            MenuChoice::Delete => "Delete Book (by ISBN)",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Input that is not one of the menu numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| trimmed == choice.number().to_string())
            .ok_or_else(|| InvalidChoice(trimmed.to_string()))
    }
}
