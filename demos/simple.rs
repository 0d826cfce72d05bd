use chrono::NaiveDate;
use holidays_engine::Country;

fn main() -> Result<(), holidays_engine::Error> {
    let d = NaiveDate::from_ymd_opt(2024, 9, 16).expect("Invalid date");
    println!(
        "Is {d} a holiday in Mexico? Answer is {}",
        holidays_engine::contains(Country::MX, d)?
    );

    println!("{:?}", holidays_engine::get(Country::MX, d)?);

    Ok(())
}
