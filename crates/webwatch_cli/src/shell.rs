//! Interactive menu shell over the monitor core.
//!
//! # Responsibility
//! - Prompt for registration, drive the subscribe/check/list/exit loop.
//! - Translate core signals into console lines; the core never prints.
//!
//! # Invariants
//! - Out-of-range integer menu choices print "Invalid choice" and redisplay
//!   the menu.
//! - Non-integer input re-prompts instead of aborting the session.
//! - Strategy choice outside 1..=3 falls back to exact comparison, with a
//!   notice.

use std::io::{self, BufRead, Write};
use webwatch_core::{ContentSource, MonitorService, SubscribeRequest};

/// Console shell bound to a line-based input and an output sink.
pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the full session: registration, then the menu loop.
    ///
    /// Returns when the user selects Exit or input ends.
    pub fn run<S: ContentSource>(&mut self, source: S) -> io::Result<()> {
        writeln!(self.output, "=== WEBSITE MONITOR ===")?;
        let name = self.prompt_line("Enter your name: ")?;
        let email = self.prompt_line("Enter your email: ")?;
        let phone = self.prompt_line("Enter your phone number: ")?;
        let mut service = MonitorService::register(name, email, phone, source);

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "--- MAIN MENU ---")?;
            writeln!(self.output, "1. Subscribe to website")?;
            writeln!(self.output, "2. Check for updates")?;
            writeln!(self.output, "3. List subscriptions")?;
            writeln!(self.output, "4. Exit")?;
            let choice = self.prompt_number("Choose option: ")?;

            match choice {
                1 => self.subscribe_flow(&mut service)?,
                2 => self.check_flow(&mut service)?,
                3 => self.list_flow(&service)?,
                4 => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice")?,
            }
        }
    }

    fn subscribe_flow<S: ContentSource>(
        &mut self,
        service: &mut MonitorService<S>,
    ) -> io::Result<()> {
        let url = self.prompt_line("Enter website URL: ")?;

        writeln!(self.output, "Select comparison strategy:")?;
        writeln!(self.output, "1. Identical content size")?;
        writeln!(self.output, "2. Identical HTML content")?;
        writeln!(self.output, "3. Identical text content")?;
        let strategy_choice = self.prompt_number("Your choice: ")?;
        if !(1..=3).contains(&strategy_choice) {
            writeln!(self.output, "Invalid choice, defaulting to HTML comparison.")?;
        }

        writeln!(self.output, "Select notification methods:")?;
        writeln!(self.output, "1. Email")?;
        writeln!(self.output, "2. SMS")?;
        writeln!(self.output, "3. Both")?;
        let notify_choice = self.prompt_number("Your choice: ")?;

        let receipt = service.subscribe(SubscribeRequest {
            url,
            strategy_choice,
            notify_choice,
        });
        writeln!(
            self.output,
            "Successfully subscribed to {} using {}",
            receipt.url, receipt.strategy
        )?;
        Ok(())
    }

    fn check_flow<S: ContentSource>(
        &mut self,
        service: &mut MonitorService<S>,
    ) -> io::Result<()> {
        if service.subscriptions().is_empty() {
            writeln!(self.output, "No subscriptions to check")?;
            return Ok(());
        }

        writeln!(self.output, "Checking for updates...")?;
        for outcome in service.check_all() {
            match outcome.report {
                Some(report) => {
                    for delivery in report.deliveries {
                        writeln!(self.output, "{}", delivery.line)?;
                    }
                }
                None => writeln!(self.output, "No update found on: {}", outcome.url)?,
            }
        }
        Ok(())
    }

    fn list_flow<S: ContentSource>(&mut self, service: &MonitorService<S>) -> io::Result<()> {
        let subscriptions = service.subscriptions();
        if subscriptions.is_empty() {
            writeln!(self.output, "No active subscriptions")?;
            return Ok(());
        }

        writeln!(self.output, "Your subscriptions:")?;
        for (index, info) in subscriptions.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} (Strategy: {})",
                index + 1,
                info.url,
                info.strategy
            )?;
        }
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended mid-session",
            ));
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn prompt_number(&mut self, prompt: &str) -> io::Result<u32> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.trim().parse::<u32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a number.")?,
            }
        }
    }
}
