//! Interactive console calculator
//!
//! Walks the user through a full or quick calculation, optionally measures an
//! expense in work time, offers to save the result, and repeats until the
//! user declines.

pub mod prompt;
pub mod steps;

pub use prompt::Prompter;

use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::display::{format_advisories, format_calculation, format_projection, format_quick_summary};
use crate::engine::{Calculation, Calculator};
use crate::error::TrueWageResult;
use crate::models::ExpenseProjection;
use crate::services::RecordService;
use crate::storage::Storage;

use steps::{CommuteStep, ExpenseStep, PayStep, QuickStep, ScheduleStep};

/// Calculator choice on the opening menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Full,
    Quick,
}

/// The interactive calculator loop
pub struct Wizard<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> Wizard<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Run until the user declines another calculation
    ///
    /// Returns how many calculations were completed.
    pub fn run<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> TrueWageResult<usize> {
        p.say("=== True Hourly Wage Calculator ===")?;

        let mut completed = 0;
        loop {
            p.say("")?;
            p.say("Choose a calculator:")?;
            p.say("  1. Full calculator")?;
            p.say("  2. Quick bi-weekly calculator")?;
            let mode = match p.ask_choice("Enter choice (1-2): ", 2)? {
                1 => WizardMode::Full,
                _ => WizardMode::Quick,
            };

            match mode {
                WizardMode::Full => self.full(p)?,
                WizardMode::Quick => self.quick(p)?,
            }
            completed += 1;

            p.say("")?;
            if !p.confirm("Calculate another? (yes/no): ")? {
                break;
            }
        }

        p.say("Goodbye!")?;
        Ok(completed)
    }

    fn full<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> TrueWageResult<()> {
        let symbol = self.settings.currency_symbol.as_str();
        let calculator = Calculator::new(&self.settings.engine);

        let pay = PayStep::run(p, self.settings.default_frequency)?;
        let schedule = ScheduleStep::run(p)?;
        let commute = CommuteStep::run(p, &self.settings.engine)?;

        p.say("")?;
        p.say(format!("Calculating true hourly wage for {}...", pay.name))?;
        let calc = calculator.calculate_with_tag(pay.amount, &pay.frequency_tag, schedule, commute)?;
        p.write(&format_calculation(Some(&pay.name), &calc, &self.settings.engine, symbol))?;

        let projection = match ExpenseStep::run(p)? {
            Some(expense) => {
                let projected =
                    calculator.project(expense.name, calc.result.true_wage, expense.cost, expense.cadence);
                p.say("")?;
                p.write(&format_projection(&projected.projection, symbol))?;
                p.write(&format_advisories(&projected.advisories))?;
                Some(projected.projection)
            }
            None => None,
        };

        self.offer_save(p, &pay.name, &calc, projection)
    }

    fn quick<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> TrueWageResult<()> {
        let (name, inputs) = QuickStep::run(p, &self.settings.engine)?;
        let calc = Calculator::new(&self.settings.engine).calculate(&inputs)?;

        p.say("")?;
        p.write(&format_quick_summary(&name, &calc, &self.settings.currency_symbol))?;

        self.offer_save(p, &name, &calc, None)
    }

    /// Offer to save the calculation, re-asking for a name if it is taken
    fn offer_save<R: BufRead, W: Write>(
        &self,
        p: &mut Prompter<R, W>,
        default_name: &str,
        calc: &Calculation,
        projection: Option<ExpenseProjection>,
    ) -> TrueWageResult<()> {
        p.say("")?;
        if !p.confirm("Save this calculation? (yes/no): ")? {
            return Ok(());
        }

        let service = RecordService::new(self.storage);
        let record = loop {
            let answer = p.ask(&format!("Record name [{}]: ", default_name))?;
            let name = if answer.is_empty() { default_name } else { answer.as_str() };

            match service.save_calculation(name, &calc.inputs, calc, None) {
                Ok(record) => break record,
                Err(e) if e.is_validation() => p.say(e)?,
                Err(e) => return Err(e),
            }
        };
        p.say(format!("Saved record: {} ({})", record.name, record.id))?;

        if let Some(projection) = projection {
            let stored = service.add_projection(record.id, projection)?;
            p.say(format!("Saved projection: {} ({})", stored.projection.name, stored.id))?;
        }

        Ok(())
    }
}

/// Run the wizard on the terminal
pub fn run(storage: &Storage, settings: &Settings) -> TrueWageResult<usize> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    Wizard::new(storage, settings).run(&mut prompter)
}
