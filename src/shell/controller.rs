use std::io::{BufRead, Write};
use tracing::{debug, info};
use crate::books::factory::seed_books;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::add_member_cmd::{AddMemberCommand, AddMemberCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::list_members_cmd::{ListMembersCommand, ListMembersCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::checkout::command::borrowed_books_cmd::{BorrowedBooksCommand, BorrowedBooksCommandRequest};
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::checkout::factory::create_checkout_service;
use crate::core::command::Command;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::parties::factory::seed_members;
use crate::shell::menu::{MENU, MenuChoice, parse_id};

/// Shell is the read-print loop over a catalog. Every operator mistake is
/// reported on `output` and the loop carries on; only I/O failures escape.
pub struct Shell<R, W> {
    config: Configuration,
    catalog_service: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: &Configuration, catalog_service: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            config: config.clone(),
            catalog_service,
            input,
            output,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }

    /// Loads the starter books and members, announcing each one.
    pub fn seed(&mut self) -> LibraryResult<()> {
        for book in seed_books() {
            let res = AddBookCommand::new(self.catalog_service.as_mut())
                .execute(AddBookCommandRequest::from(&book));
            match res {
                Ok(res) => writeln!(self.output, "Book '{}' added to the library.", res.book.title)?,
                Err(err) => writeln!(self.output, "{}", err.message())?,
            }
        }
        for member in seed_members() {
            let res = AddMemberCommand::new(self.catalog_service.as_mut())
                .execute(AddMemberCommandRequest::from(&member));
            match res {
                Ok(res) => writeln!(self.output, "Member '{}' added to the library.", res.member.name)?,
                Err(err) => writeln!(self.output, "{}", err.message())?,
            }
        }
        Ok(())
    }

    /// Runs until the operator picks exit or the input ends.
    pub fn run(&mut self) -> LibraryResult<()> {
        info!(branch_id = self.config.branch_id.as_str(), "shell started");
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                info!("input closed");
                return Ok(());
            };
            let choice = MenuChoice::from(line.as_str());
            debug!(?choice, "menu choice");
            match choice {
                MenuChoice::Exit => {
                    info!("shell exit");
                    return Ok(());
                }
                MenuChoice::ListBooks => self.list_books()?,
                MenuChoice::ListMembers => self.list_members()?,
                MenuChoice::BorrowBook => self.borrow_book()?,
                MenuChoice::ReturnBook => self.return_book()?,
                MenuChoice::BorrowedBooks => self.borrowed_books()?,
                MenuChoice::Invalid => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn list_books(&mut self) -> LibraryResult<()> {
        match ListBooksCommand::new(self.catalog_service.as_ref()).execute(ListBooksCommandRequest::default()) {
            Ok(res) => writeln!(self.output, "{}", res.listing)?,
            Err(err) => writeln!(self.output, "{}", err.message())?,
        }
        Ok(())
    }

    fn list_members(&mut self) -> LibraryResult<()> {
        match ListMembersCommand::new(self.catalog_service.as_ref()).execute(ListMembersCommandRequest::default()) {
            Ok(res) => writeln!(self.output, "{}", res.listing)?,
            Err(err) => writeln!(self.output, "{}", err.message())?,
        }
        Ok(())
    }

    fn borrow_book(&mut self) -> LibraryResult<()> {
        let Some((member_id, book_id)) = self.prompt_member_and_book()? else {
            return Ok(());
        };
        let svc = create_checkout_service(&self.config, self.catalog_service.as_mut());
        match CheckoutBookCommand::new(svc).execute(CheckoutBookCommandRequest::new(member_id, book_id)) {
            Ok(res) => writeln!(self.output, "{} has successfully borrowed '{}'.",
                                res.checkout.member_name, res.checkout.title)?,
            Err(err) => writeln!(self.output, "{}", err.message())?,
        }
        Ok(())
    }

    fn return_book(&mut self) -> LibraryResult<()> {
        let Some((member_id, book_id)) = self.prompt_member_and_book()? else {
            return Ok(());
        };
        let svc = create_checkout_service(&self.config, self.catalog_service.as_mut());
        match ReturnBookCommand::new(svc).execute(ReturnBookCommandRequest::new(member_id, book_id)) {
            Ok(res) => writeln!(self.output, "{} has returned '{}'.",
                                res.checkout.member_name, res.checkout.title)?,
            Err(err) => writeln!(self.output, "{}", err.message())?,
        }
        Ok(())
    }

    fn borrowed_books(&mut self) -> LibraryResult<()> {
        let Some(member_id) = self.prompt_id("Enter member ID: ")? else {
            return Ok(());
        };
        let svc = create_checkout_service(&self.config, self.catalog_service.as_mut());
        match BorrowedBooksCommand::new(svc).execute(BorrowedBooksCommandRequest::new(member_id)) {
            Ok(res) => writeln!(self.output, "{}", res.listing)?,
            Err(err) => writeln!(self.output, "{}", err.message())?,
        }
        Ok(())
    }

    // Both ids are collected before any lookup; the book prompt is skipped once the member id is bad.
    fn prompt_member_and_book(&mut self) -> LibraryResult<Option<(i32, i32)>> {
        let Some(member_id) = self.prompt_id("Enter member ID: ")? else {
            return Ok(None);
        };
        let Some(book_id) = self.prompt_id("Enter book ID: ")? else {
            return Ok(None);
        };
        Ok(Some((member_id, book_id)))
    }

    fn prompt_id(&mut self, prompt: &str) -> LibraryResult<Option<i32>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let id = self.read_line()?.as_deref().and_then(parse_id);
        if id.is_none() {
            writeln!(self.output, "Invalid ID format.")?;
        }
        Ok(id)
    }

    fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
