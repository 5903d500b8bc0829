use clap::{Args, Subcommand};
use hotel_reservations::error::AppError;
use hotel_reservations::{
    Customer, CustomerId, CustomerManager, Hotel, HotelId, HotelManager, Reservation,
    ReservationId, ReservationService,
};

#[derive(Subcommand, Debug)]
pub(crate) enum HotelCommand {
    /// Add a hotel
    Create(HotelArgs),
    /// Remove a hotel
    Delete { hotel_id: String },
    /// Show one hotel
    Show { hotel_id: String },
    /// Overwrite a single attribute (hotel_id, name, location, rooms_available)
    Modify(ModifyArgs),
    /// Take one room
    ReserveRoom { hotel_id: String },
    /// Give one room back
    CancelRoom { hotel_id: String },
    /// List every hotel
    List,
}

#[derive(Args, Debug)]
pub(crate) struct HotelArgs {
    #[arg(long)]
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) location: String,
    #[arg(long)]
    pub(crate) rooms: u32,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CustomerCommand {
    /// Add a customer
    Create(CustomerArgs),
    /// Remove a customer
    Delete { customer_id: String },
    /// Show one customer
    Show { customer_id: String },
    /// Overwrite a single attribute (customer_id, name, email)
    Modify(ModifyArgs),
    /// List every customer
    List,
}

#[derive(Args, Debug)]
pub(crate) struct CustomerArgs {
    #[arg(long)]
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
}

#[derive(Args, Debug)]
pub(crate) struct ModifyArgs {
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) field: String,
    #[arg(long)]
    pub(crate) value: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ReservationCommand {
    /// Store a reservation record without touching room counts
    Create(ReservationArgs),
    /// Remove a reservation record without touching room counts
    Cancel { reservation_id: String },
    /// Show one reservation
    Show { reservation_id: String },
    /// List every reservation
    List,
    /// Store a reservation and take a room at its hotel
    Book(BookArgs),
    /// Remove a reservation and give its room back
    Release { reservation_id: String },
}

#[derive(Args, Debug)]
pub(crate) struct ReservationArgs {
    #[arg(long)]
    pub(crate) id: String,
    #[arg(long)]
    pub(crate) customer: String,
    #[arg(long)]
    pub(crate) hotel: String,
}

#[derive(Args, Debug)]
pub(crate) struct BookArgs {
    /// Reservation id; the next free R### id is used when omitted
    #[arg(long)]
    pub(crate) id: Option<String>,
    #[arg(long)]
    pub(crate) customer: String,
    #[arg(long)]
    pub(crate) hotel: String,
}

pub(crate) fn run_hotel(hotels: &HotelManager, command: HotelCommand) -> Result<(), AppError> {
    match command {
        HotelCommand::Create(args) => {
            let hotel = Hotel::new(args.id, args.name, args.location, args.rooms);
            hotels.create(hotel.clone())?;
            println!("Created {hotel}");
        }
        HotelCommand::Delete { hotel_id } => {
            let removed = hotels.delete(&HotelId::from(hotel_id))?;
            println!("Deleted hotel {}", removed.hotel_id);
        }
        HotelCommand::Show { hotel_id } => {
            println!("{}", hotels.display(&HotelId::from(hotel_id))?);
        }
        HotelCommand::Modify(args) => {
            let updated = hotels.modify(&HotelId::from(args.id), &args.field, &args.value)?;
            println!("Updated {updated}");
        }
        HotelCommand::ReserveRoom { hotel_id } => {
            let remaining = hotels.reserve_room(&HotelId::from(hotel_id.as_str()))?;
            println!("Reserved a room at {hotel_id}; {remaining} left");
        }
        HotelCommand::CancelRoom { hotel_id } => {
            let available = hotels.cancel_reservation(&HotelId::from(hotel_id.as_str()))?;
            println!("Released a room at {hotel_id}; {available} available");
        }
        HotelCommand::List => render_list("hotels", &hotels.list()),
    }
    Ok(())
}

pub(crate) fn run_customer(
    customers: &CustomerManager,
    command: CustomerCommand,
) -> Result<(), AppError> {
    match command {
        CustomerCommand::Create(args) => {
            let customer = Customer::new(args.id, args.name, args.email);
            customers.create(customer.clone())?;
            println!("Created {customer}");
        }
        CustomerCommand::Delete { customer_id } => {
            let removed = customers.delete(&CustomerId::from(customer_id))?;
            println!("Deleted customer {}", removed.customer_id);
        }
        CustomerCommand::Show { customer_id } => {
            println!("{}", customers.display(&CustomerId::from(customer_id))?);
        }
        CustomerCommand::Modify(args) => {
            let updated =
                customers.modify(&CustomerId::from(args.id), &args.field, &args.value)?;
            println!("Updated {updated}");
        }
        CustomerCommand::List => render_list("customers", &customers.list()),
    }
    Ok(())
}

pub(crate) fn run_reservation(
    service: &ReservationService,
    command: ReservationCommand,
) -> Result<(), AppError> {
    let reservations = service.reservations();
    match command {
        ReservationCommand::Create(args) => {
            let reservation = Reservation::new(args.id, args.customer, args.hotel);
            reservations.create(reservation.clone())?;
            println!("Created {reservation}");
        }
        ReservationCommand::Cancel { reservation_id } => {
            let removed = reservations.cancel(&ReservationId::from(reservation_id))?;
            println!("Cancelled reservation {}", removed.reservation_id);
        }
        ReservationCommand::Show { reservation_id } => {
            println!(
                "{}",
                reservations.display(&ReservationId::from(reservation_id))?
            );
        }
        ReservationCommand::List => render_list("reservations", &reservations.list()),
        ReservationCommand::Book(args) => {
            let customer_id = CustomerId::from(args.customer);
            let hotel_id = HotelId::from(args.hotel);
            let booked = match args.id {
                Some(id) => service.book(Reservation {
                    reservation_id: ReservationId::from(id),
                    customer_id,
                    hotel_id,
                })?,
                None => service.reserve(customer_id, hotel_id)?,
            };
            println!("Booked {booked}");
        }
        ReservationCommand::Release { reservation_id } => {
            let cancellation = service.cancel(&ReservationId::from(reservation_id))?;
            match cancellation.rooms_available {
                Some(rooms) => println!(
                    "Released reservation {}; hotel {} now has {rooms} rooms available",
                    cancellation.reservation.reservation_id, cancellation.reservation.hotel_id
                ),
                None => println!(
                    "Released reservation {}; hotel {} no longer exists",
                    cancellation.reservation.reservation_id, cancellation.reservation.hotel_id
                ),
            }
        }
    }
    Ok(())
}

fn render_list<T: std::fmt::Display>(label: &str, records: &[T]) {
    if records.is_empty() {
        println!("No {label} stored");
        return;
    }
    for record in records {
        println!("{record}");
    }
}
