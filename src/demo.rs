use clap::Args;
use hotel_reservations::error::AppError;
use hotel_reservations::{
    Customer, CustomerId, Hotel, HotelId, Reservation, ReservationService, ReservationServiceError,
};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip seeding sample hotels and customers.
    #[arg(long)]
    pub(crate) no_seed: bool,
}

fn sample_hotels() -> Vec<Hotel> {
    vec![
        Hotel::new("H01", "Tequendama", "Bogota", 2),
        Hotel::new("H02", "Casa Medina", "Bogota", 5),
    ]
}

fn sample_customers() -> Vec<Customer> {
    vec![Customer::new("C01", "Daniel", "d@test.com")]
}

pub(crate) fn run_demo(service: &ReservationService, args: DemoArgs) -> Result<(), AppError> {
    println!("=== Hotel reservation demo ===");

    if !args.no_seed {
        seed(service)?;
    }

    println!("\nHotel catalogue");
    for hotel_id in ["H01", "H02"] {
        show_hotel(service, hotel_id);
    }

    println!("\nCustomers");
    match service.customers().display(&CustomerId::from("C01")) {
        Ok(customer) => println!("{customer}"),
        Err(err) => println!("- {err}"),
    }

    println!("\nBooking reservation R01");
    let reservation = Reservation::new("R01", "C01", "H01");
    match service.book(reservation) {
        Ok(booked) => println!(
            "Reservation {} booked for customer {} at hotel {}",
            booked.reservation_id, booked.customer_id, booked.hotel_id
        ),
        Err(ReservationServiceError::Reservation(err)) => {
            println!("- {err}; keeping the existing booking");
        }
        Err(err) => return Err(err.into()),
    }

    println!("\nUpdated availability");
    show_hotel(service, "H01");
    info!("demo finished");

    Ok(())
}

fn seed(service: &ReservationService) -> Result<(), AppError> {
    for hotel in sample_hotels() {
        if !service.hotels().exists(&hotel.hotel_id) {
            service.hotels().create(hotel)?;
        }
    }
    for customer in sample_customers() {
        if !service.customers().exists(&customer.customer_id) {
            service.customers().create(customer)?;
        }
    }
    Ok(())
}

fn show_hotel(service: &ReservationService, hotel_id: &str) {
    match service.hotels().display(&HotelId::from(hotel_id)) {
        Ok(hotel) => println!("{hotel}"),
        Err(err) => println!("- {err}"),
    }
}
