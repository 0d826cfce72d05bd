use holidays_engine::{Country, HolidaysOptions};

fn main() -> Result<(), holidays_engine::Error> {
    let us = Country::US.holidays(HolidaysOptions::new().year(2024))?;
    let ca = Country::CA.holidays(HolidaysOptions::new().year(2024))?;
    let mut both = &us + &ca;

    for date in both.range("2024-06-01".."2024-09-01")? {
        println!("{date} {}", both.name(date)?);
    }
    Ok(())
}
