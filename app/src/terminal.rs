//! Line-oriented front end for a mounted `ProductList`.
//!
//! Each card's key stands in for a click on its description: `open <key>`
//! shows the detail overlay, `close` dismisses it.

use std::io::{self, BufRead, Write};

use catalog_core::{DetailView, ProductList, Tint};
use crossterm::style::{style, Color, Stylize};
use tracing::debug;

const HELP: &str = "commands: open <id> | close | list | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(String),
    Close,
    List,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let command = match (words.next(), words.next(), words.next()) {
            (Some("open" | "o"), Some(id), None) => Command::Open(id.to_string()),
            (Some("open" | "o"), None, None) => return Err("usage: open <id>".to_string()),
            (Some("close" | "c"), None, None) => Command::Close,
            (Some("list" | "l"), None, None) => Command::List,
            (Some("help" | "h" | "?"), None, None) => Command::Help,
            (Some("quit" | "q" | "exit"), None, None) => Command::Quit,
            _ => return Err(format!("unknown command: {}", line.trim())),
        };
        Ok(command)
    }
}

pub struct Session {
    list: ProductList,
    color: bool,
}

impl Session {
    pub fn new(list: ProductList, color: bool) -> Self {
        Self { list, color }
    }

    #[cfg(test)]
    pub fn list(&self) -> &ProductList {
        &self.list
    }

    pub fn print_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.list.list_view())
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{HELP}")?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(command, out)?,
                Err(message) => writeln!(out, "{message}")?,
            }
        }
        Ok(())
    }

    fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        debug!(?command, "terminal command");
        match command {
            Command::Open(id) => {
                if !self.list.select(&id) {
                    return writeln!(out, "no product with id {id}");
                }
                if let Some(detail) = self.list.detail_view() {
                    self.print_detail(&detail, out)?;
                }
                Ok(())
            }
            Command::Close => {
                self.list.dismiss();
                Ok(())
            }
            Command::List => self.print_list(out),
            Command::Help => writeln!(out, "{HELP}"),
            Command::Quit => Ok(()),
        }
    }

    fn print_detail<W: Write>(&self, detail: &DetailView, out: &mut W) -> io::Result<()> {
        if !self.color {
            return write!(out, "{detail}");
        }
        let availability = detail.availability_line();
        for line in detail.to_string().lines() {
            if line == availability {
                writeln!(out, "{}", paint(line, detail.availability_tint))?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Muted => Color::DarkGrey,
        Tint::Highlight => Color::Cyan,
    }
}

fn paint(text: &str, tint: Tint) -> String {
    style(text).with(tint_color(tint)).to_string()
}

#[cfg(test)]
mod tests {
    use catalog_core::{CatalogClient, CatalogError, HttpRequest, HttpResponse};

    use super::*;

    const CATALOG: &str = r#"{"products":[
        {"id":1,"title":"Essence Mascara","thumbnail":"x.jpg","description":"d","price":9.99,"sku":"SKU1","category":"beauty","weight":2,"availabilityStatus":"In Stock","warrantyInformation":"1 week","rating":4.5,"stock":5},
        {"id":2,"title":"Red Lipstick","thumbnail":"l.png","description":"Bold","price":12,"sku":"SKU2","category":"beauty","weight":1,"availabilityStatus":"Low Stock","warrantyInformation":"3 months warranty","rating":3.1,"stock":2}
    ]}"#;

    fn session(color: bool) -> Session {
        let transport = |_: &HttpRequest| -> Result<HttpResponse, CatalogError> {
            Ok(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: CATALOG.to_string(),
            })
        };
        let mut list = ProductList::mount(CatalogClient::default(), transport);
        list.wait();
        Session::new(list, color)
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(Command::parse("open 7"), Ok(Command::Open("7".to_string())));
        assert_eq!(Command::parse("  o 7 "), Ok(Command::Open("7".to_string())));
        assert_eq!(Command::parse("close"), Ok(Command::Close));
        assert_eq!(Command::parse("l"), Ok(Command::List));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!(Command::parse("open").is_err());
        assert!(Command::parse("open 1 2").is_err());
        assert!(Command::parse("buy 1").is_err());
        assert!(Command::parse("close now").is_err());
    }

    #[test]
    fn prints_one_card_per_product() {
        let session = session(false);
        let mut out = Vec::new();
        session.print_list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1] Essence Mascara"));
        assert!(text.contains("[2] Red Lipstick"));
        assert!(text.contains("$9.99  #beauty"));
        assert!(text.contains("$12  #beauty"));
        assert_eq!(text.matches("[ Add to cart ]").count(), 2);
    }

    #[test]
    fn open_prints_detail_and_close_dismisses() {
        let mut session = session(false);
        let text = run(&mut session, "open 1\n");
        assert!(text.contains("== Essence Mascara =="));
        assert!(text.contains("Availability: In Stock (5)"));
        assert_eq!(session.list().state().selected().map(|p| p.id.as_str()), Some("1"));

        run(&mut session, "close\nclose\n");
        assert!(session.list().state().selected().is_none());
    }

    #[test]
    fn unknown_id_leaves_state_alone() {
        let mut session = session(false);
        run(&mut session, "open 2\n");
        let text = run(&mut session, "open 99\n");
        assert!(text.contains("no product with id 99"));
        assert_eq!(session.list().state().selected().map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = session(false);
        run(&mut session, "quit\nopen 1\n");
        assert!(session.list().state().selected().is_none());
    }

    #[test]
    fn availability_line_is_tinted_by_status() {
        let mut session = session(true);
        let in_stock = run(&mut session, "open 1\n");
        let muted = style("Availability: In Stock (5)").with(Color::DarkGrey).to_string();
        assert!(in_stock.contains(&muted));

        let low_stock = run(&mut session, "open 2\n");
        let highlighted = style("Availability: Low Stock (2)").with(Color::Cyan).to_string();
        assert!(low_stock.contains(&highlighted));
        assert_ne!(muted, highlighted);
    }

    #[test]
    fn plain_session_writes_no_styling() {
        let mut session = session(false);
        let text = run(&mut session, "open 2\n");
        assert!(text.contains("Availability: Low Stock (2)\n"));
        assert!(!text.contains('\x1b'));
    }
}
