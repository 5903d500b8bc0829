use crate::commands::{
    run_customer, run_hotel, run_reservation, CustomerCommand, HotelCommand, ReservationCommand,
};
use crate::demo::{run_demo, DemoArgs};
use clap::{Parser, Subcommand};
use hotel_reservations::config::AppConfig;
use hotel_reservations::error::AppError;
use hotel_reservations::telemetry;
use hotel_reservations::ReservationService;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Hotel Reservations",
    about = "Manage hotels, customers, and reservations stored as JSON files",
    version
)]
struct Cli {
    /// Directory holding the JSON stores (overrides RESERVATIONS_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage hotel records and room availability
    Hotel {
        #[command(subcommand)]
        command: HotelCommand,
    },
    /// Manage customer records
    Customer {
        #[command(subcommand)]
        command: CustomerCommand,
    },
    /// Manage reservation records
    Reservation {
        #[command(subcommand)]
        command: ReservationCommand,
    },
    /// Seed sample data and walk through a booking (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(data_dir) = cli.data_dir {
        config.store.data_dir = data_dir;
    }

    telemetry::init(&config.telemetry)?;
    debug!(
        environment = ?config.environment,
        data_dir = %config.store.data_dir.display(),
        "stores configured"
    );

    let service = ReservationService::from_config(&config.store);
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Hotel { command } => run_hotel(service.hotels(), command),
        Command::Customer { command } => run_customer(service.customers(), command),
        Command::Reservation { command } => run_reservation(&service, command),
        Command::Demo(args) => run_demo(&service, args),
    }
}
