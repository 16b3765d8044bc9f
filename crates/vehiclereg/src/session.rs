//! Interactive console session.
//!
//! A menu loop that collects raw input line by line, runs it through the
//! [`Validator`], and calls the [`VehicleStore`]. Rejections are reported
//! and the user is asked again; nothing here is fatal except I/O failure.
//!
//! The session is generic over its reader and writer so it can be driven
//! from a terminal or from a script.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::record::{PlateFormat, VehicleRecord};
use crate::store::VehicleStore;
use crate::validation::{parse_number, validate_non_empty, Field, ValidationError, Validator};

const RULE: &str = "----------------------------------------------------";

/// An entry in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a new vehicle.
    Register,
    /// List every registered vehicle.
    ViewAll,
    /// Look a vehicle up by VIN or plate.
    Search,
    /// Remove a vehicle by VIN.
    Delete,
    /// Show summary statistics.
    Stats,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [Self; 6] = [
        Self::Register,
        Self::ViewAll,
        Self::Search,
        Self::Delete,
        Self::Stats,
        Self::Exit,
    ];

    /// Parse the number typed at the menu prompt.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let index = text.trim().parse::<usize>().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Register => "Register a new vehicle",
            Self::ViewAll => "View all registered vehicles",
            Self::Search => "Search vehicle by VIN or plate",
            Self::Delete => "Delete vehicle by VIN",
            Self::Stats => "Vehicle statistics",
            Self::Exit => "Exit",
        }
    }
}

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Parse the plate format selection, `1` for old and `2` for new.
fn parse_plate_choice(text: &str) -> std::result::Result<PlateFormat, ValidationError> {
    match text.trim() {
        "1" => Ok(PlateFormat::Old),
        "2" => Ok(PlateFormat::New),
        other => Err(ValidationError::InvalidFormat {
            field: Field::Plate,
            value: other.to_string(),
            expected: "1 (old format) or 2 (new format)",
        }),
    }
}

fn write_record<W: Write>(out: &mut W, record: &VehicleRecord) -> Result<()> {
    writeln!(out, "Make         : {}", record.make())?;
    writeln!(out, "Model        : {}", record.model())?;
    writeln!(out, "VIN          : {}", record.vin())?;
    writeln!(out, "Plate Number : {}", record.plate())?;
    writeln!(out, "Mileage      : {} km", record.mileage())?;
    writeln!(out, "Year         : {}", record.year())?;
    Ok(())
}

/// A single user's interactive session over one store.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
    store: VehicleStore,
    validator: Validator,
    settings: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty store.
    #[must_use]
    pub fn new(input: R, output: W, validator: Validator, settings: SessionConfig) -> Self {
        Self {
            input,
            output,
            store: VehicleStore::new(),
            validator,
            settings,
        }
    }

    /// Start the session with an existing store instead of an empty one.
    #[must_use]
    pub fn with_store(mut self, store: VehicleStore) -> Self {
        self.store = store;
        self
    }

    /// The session's store.
    #[must_use]
    pub fn store(&self) -> &VehicleStore {
        &self.store
    }

    /// Consume the session, returning its store and writer.
    #[must_use]
    pub fn into_parts(self) -> (VehicleStore, W) {
        (self.store, self.output)
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        info!(vehicles = self.store.len(), "Session started");

        if self.settings.show_banner {
            self.print_banner()?;
        }

        loop {
            self.print_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(
                    self.output,
                    "Invalid selection. Please choose from the listed options only.\n"
                )?;
                continue;
            };

            debug!(?choice, "Menu selection");
            if self.dispatch(choice)? == Flow::Exit {
                break;
            }
        }

        writeln!(
            self.output,
            "\nThank you for using Vehicle Reg. Your data session is now closed."
        )?;
        self.output.flush()?;
        info!(vehicles = self.store.len(), "Session closed");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Register => self.register(),
            MenuChoice::ViewAll => self.view_all().map(|()| Flow::Continue),
            MenuChoice::Search => self.search(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Stats => self.stats().map(|()| Flow::Continue),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "       VEHICLE REGISTRATION SYSTEM")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(
            self.output,
            "Register, search, view and manage vehicle details."
        )?;
        writeln!(
            self.output,
            "Records are kept in memory for this session only."
        )?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n------------------ MAIN MENU ------------------")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        write!(self.output, "\nSelect an option to proceed: ")?;
        Ok(())
    }

    /// Read one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.read_line()
    }

    /// Ask until `check` accepts the answer, or input ends.
    fn prompt_valid<T>(
        &mut self,
        message: &str,
        check: impl Fn(&Validator, &str) -> std::result::Result<T, ValidationError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match check(&self.validator, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "Error: {e}. Try again.")?,
            }
        }
    }

    fn register(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n-- Register a New Vehicle --")?;

        let Some(make) = self.prompt_valid(
            "Enter the vehicle make (e.g. Toyota, BMW, Hyundai): ",
            |_, text| validate_non_empty(Field::Make, text),
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(model) = self.prompt_valid(
            "Enter the vehicle model (e.g. Corolla, i20, M4): ",
            |_, text| validate_non_empty(Field::Model, text),
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(vin) = self.prompt_valid(
            "Enter VIN (17 characters, e.g. A1B2C3D4E5F6G7H8J): ",
            Validator::validate_vin,
        )?
        else {
            return Ok(Flow::Exit);
        };

        writeln!(self.output, "\nSelect a license plate format:")?;
        for (i, format) in PlateFormat::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "{} - {} format (e.g. {})",
                i + 1,
                format,
                format.example()
            )?;
        }
        let Some(format) =
            self.prompt_valid("Your selection: ", |_, text| parse_plate_choice(text))?
        else {
            return Ok(Flow::Exit);
        };
        let plate_prompt = format!("Enter full license plate (e.g. {}): ", format.example());
        let Some(plate) = self.prompt_valid(&plate_prompt, |validator, text| {
            validator.validate_plate(text, format)
        })?
        else {
            return Ok(Flow::Exit);
        };

        let Some(mileage) = self.prompt_valid(
            "Enter mileage in kilometres (e.g. 85200): ",
            |validator, text| validator.validate_mileage(parse_number(Field::Mileage, text)?),
        )?
        else {
            return Ok(Flow::Exit);
        };
        let Some(year) = self.prompt_valid(
            "Enter year of manufacture (e.g. 2020): ",
            |validator, text| validator.validate_year(parse_number(Field::Year, text)?),
        )?
        else {
            return Ok(Flow::Exit);
        };

        let record = VehicleRecord::new(make, model, vin, plate, mileage, year);

        if self.settings.confirm_before_save {
            writeln!(self.output, "\n--- Confirm Vehicle Entry ---")?;
            write_record(&mut self.output, &record)?;
            let Some(answer) = self.prompt("Save this vehicle? (yes/no): ")? else {
                return Ok(Flow::Exit);
            };
            if !answer.trim().eq_ignore_ascii_case("yes") {
                writeln!(self.output, "Vehicle entry cancelled.")?;
                return Ok(Flow::Continue);
            }
        }

        match self.store.add(record) {
            Ok(()) => writeln!(self.output, "Vehicle registered successfully.")?,
            Err(e @ Error::DuplicateKey { .. }) => writeln!(self.output, "Error: {e}.")?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> Result<()> {
        writeln!(self.output, "\n================ REGISTERED VEHICLES ===============")?;
        if self.store.is_empty() {
            writeln!(
                self.output,
                "[No vehicles registered yet. Please use option 1 to begin.]"
            )?;
            return Ok(());
        }

        for (i, record) in self.store.list_all().iter().enumerate() {
            writeln!(self.output, "\nVehicle #{}", i + 1)?;
            write_record(&mut self.output, record)?;
            writeln!(self.output, "{RULE}")?;
        }

        let stats = self.store.aggregate_stats();
        writeln!(self.output, "\nTotal Vehicles Registered: {}", stats.count)?;
        writeln!(
            self.output,
            "Total Combined Mileage  : {} km",
            stats.total_mileage
        )?;
        Ok(())
    }

    fn search(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n-- Search a Vehicle --")?;
        let Some(query) = self.prompt("Enter VIN or plate number to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.find_by_key(&query) {
            Ok(record) => {
                writeln!(self.output, "\nVehicle Found:")?;
                write_record(&mut self.output, record)?;
            }
            Err(e @ Error::NotFound { .. }) => writeln!(self.output, "{e}.")?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n-- Remove a Vehicle Record --")?;
        let Some(vin) = self.prompt("Enter VIN of the vehicle to delete: ")? else {
            return Ok(Flow::Exit);
        };

        match self.store.delete_by_vin(&vin) {
            Ok(removed) => writeln!(
                self.output,
                "Vehicle {} ({}) removed successfully.",
                removed.vin(),
                removed.plate()
            )?,
            Err(Error::NotFound { .. }) => writeln!(
                self.output,
                "No vehicle with that VIN was found. Nothing deleted."
            )?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn stats(&mut self) -> Result<()> {
        let stats = self.store.aggregate_stats();

        writeln!(self.output, "\n============ VEHICLE STATS & INSIGHTS ============")?;
        writeln!(self.output, "Total Registered Vehicles: {}", stats.count)?;
        writeln!(
            self.output,
            "Combined Mileage         : {} km",
            stats.total_mileage
        )?;
        if let Some(average) = stats.average_mileage {
            writeln!(self.output, "Average Mileage          : {average:.1} km")?;
        }
        if let (Some(oldest), Some(newest)) = (stats.min_year, stats.max_year) {
            writeln!(self.output, "Oldest Vehicle Year      : {oldest}")?;
            writeln!(self.output, "Newest Vehicle Year      : {newest}")?;
        }
        Ok(())
    }
}
