use crate::infra::{
    load_bookings, parse_amenity, parse_date, parse_sort_key, parse_sort_order,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use homestay::error::AppError;
use homestay::workflows::bookings::{
    find_booking, is_actionable, Booking, BookingBucket, BookingId, BookingSchedule,
};
use homestay::workflows::reservation::BookingDraft;
use homestay::workflows::search::{
    rating_stars, Amenity, Property, PropertyCatalog, SearchFilters, SortKey, SortOrder, SortSpec,
};
use std::collections::BTreeSet;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct BookingsArgs {
    /// JSON file holding the guest's bookings (bare array or backend response)
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// Reference date for classification (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Show a single booking instead of the bucket listing
    #[arg(long)]
    pub(crate) booking: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Listing catalog (CSV export or JSON)
    #[arg(long)]
    pub(crate) catalog: PathBuf,
    /// Free text matched against name, city and state
    #[arg(long, default_value = "")]
    pub(crate) term: String,
    #[arg(long)]
    pub(crate) city: Option<String>,
    #[arg(long)]
    pub(crate) state: Option<String>,
    #[arg(long, default_value_t = 0.0)]
    pub(crate) min_price: f64,
    #[arg(long)]
    pub(crate) max_price: Option<f64>,
    #[arg(long, default_value_t = 0)]
    pub(crate) min_rooms: u32,
    /// Guests the listing must accommodate
    #[arg(long, default_value_t = 0)]
    pub(crate) guests: u32,
    /// Required amenity; repeat for several (all must be present)
    #[arg(long, value_parser = parse_amenity)]
    pub(crate) amenity: Vec<Amenity>,
    #[arg(long, value_parser = parse_sort_key, default_value = "price")]
    pub(crate) sort_by: SortKey,
    #[arg(long, value_parser = parse_sort_order, default_value = "asc")]
    pub(crate) order: SortOrder,
    /// Print the city and state choices found in the catalog
    #[arg(long)]
    pub(crate) facets: bool,
}

impl SearchArgs {
    fn filters(&self) -> SearchFilters {
        SearchFilters {
            search_term: self.term.clone(),
            city: self.city.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_rooms: self.min_rooms,
            max_guests: self.guests,
            amenities: self.amenity.iter().copied().collect::<BTreeSet<_>>(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    #[arg(long, value_parser = parse_date)]
    pub(crate) checkin: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date)]
    pub(crate) checkout: Option<NaiveDate>,
    /// Reference date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Nightly rate used to quote the stay
    #[arg(long)]
    pub(crate) price_per_day: Option<f64>,
}

pub(crate) fn run_bookings_report(args: BookingsArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let bookings = load_bookings(&args.file)?;

    if let Some(id) = args.booking {
        match find_booking(&bookings, BookingId(id)) {
            Some(booking) => render_booking_detail(booking, today),
            None => println!("Booking #{id} not found in {}", args.file.display()),
        }
        return Ok(());
    }

    let schedule = BookingSchedule::classify(&bookings, today);

    println!("Bookings as of {today} ({} total)", schedule.len());
    for bucket in BookingBucket::ordered() {
        render_bucket(&schedule, bucket, today);
    }

    Ok(())
}

fn render_bucket(schedule: &BookingSchedule, bucket: BookingBucket, today: NaiveDate) {
    let bookings = schedule.bucket(bucket);
    if bookings.is_empty() {
        println!("\n{}: none", bucket.label());
        return;
    }

    println!("\n{} ({})", bucket.label(), bookings.len());
    for booking in bookings {
        let actionable = if is_actionable(booking, today) {
            " | can modify"
        } else {
            ""
        };
        println!(
            "- #{} {} ({}) | {} -> {} ({} nights) | {} | payment {}{}",
            booking.booking_id,
            booking.property_name,
            booking.city,
            booking.checkin_date(),
            booking.checkout_date(),
            booking.nights(),
            booking.booking_status.label(),
            booking.payment_label(),
            actionable
        );
    }
}

fn render_booking_detail(booking: &Booking, today: NaiveDate) {
    println!("Booking #{} ({})", booking.booking_id, booking.property_name);
    println!("  city: {}", booking.city);
    println!("  check-in: {}", booking.checkin_at);
    println!("  check-out: {}", booking.checkout_at);
    println!("  nights: {}", booking.nights());
    println!("  status: {}", booking.booking_status.label());
    println!("  payment: {}", booking.payment_label());
    println!("  stay: {}", BookingBucket::of(booking, today).label());
    if booking.has_extra_cot || booking.has_deep_clean {
        let add_ons: Vec<&str> = [
            (booking.has_extra_cot, "extra cot"),
            (booking.has_deep_clean, "deep clean"),
        ]
        .into_iter()
        .filter_map(|(selected, name)| selected.then_some(name))
        .collect();
        println!("  add-ons: {}", add_ons.join(", "));
    }
    if is_actionable(booking, today) {
        println!("  can still be modified or cancelled");
    }
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let catalog = PropertyCatalog::from_path(&args.catalog)?;
    let filters = args.filters();
    let sort = SortSpec {
        sort_by: args.sort_by,
        sort_order: args.order,
    };

    if args.facets {
        let facets = catalog.facets();
        println!("Cities: {}", facets.cities.join(", "));
        println!("States: {}", facets.states.join(", "));
    }

    let results = catalog.search(&filters, sort);
    println!("Found {} properties", results.len());
    for property in &results {
        render_property(property);
    }

    Ok(())
}

fn render_property(property: &Property) {
    let amenities: Vec<&str> = property
        .amenities
        .present()
        .map(|amenity| amenity.label())
        .collect();
    println!(
        "- {} | {}, {} | {}/night | {} rooms, up to {} guests | {} ({:.1})",
        property.property_name,
        property.city,
        property.state,
        property.price_per_day,
        property.no_of_rooms,
        property.max_no_of_guests,
        rating_stars(property.property_rate),
        property.property_rate
    );
    if !amenities.is_empty() {
        println!("  amenities: {}", amenities.join(", "));
    }
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let draft = BookingDraft {
        checkin: args.checkin,
        checkout: args.checkout,
        ..BookingDraft::default()
    };

    let errors = draft.errors(today);
    if errors.is_empty() {
        println!("Stay request is valid (evaluated {today})");
    } else {
        println!("Stay request has problems (evaluated {today})");
        for error in &errors {
            println!("- {error}");
        }
    }

    let quote = args
        .price_per_day
        .filter(|_| draft.verdict(today).is_valid())
        .and_then(|price| draft.quote(price));
    if let Some(quote) = quote {
        println!(
            "Quote: {} night(s) x {} = {}",
            quote.nights, quote.price_per_day, quote.total
        );
    }

    Ok(())
}
