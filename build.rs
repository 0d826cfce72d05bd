use csv::StringRecord;
use std::{
    collections::BTreeMap,
    fmt::Display,
    fs::File,
    hash::Hash,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Observance names as they appear in `islamic.csv`, in `Observance` discriminant order.
const OBSERVANCES: &[(&str, &str)] = &[
    ("eid_al_fitr", "EidAlFitr"),
    ("eid_al_adha", "EidAlAdha"),
    ("arafah_day", "ArafahDay"),
    ("mawlid", "Mawlid"),
    ("islamic_new_year", "IslamicNewYear"),
    ("ashura", "Ashura"),
    ("isra_and_miraj", "IsraAndMiraj"),
    ("ramadan_beginning", "RamadanBeginning"),
    ("nuzul_al_quran", "NuzulAlQuran"),
    ("hari_hol_johor", "HariHolJohor"),
];

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Country {
    index: u16,
    code: String,
    alpha3: String,
    name: String,
}

pub fn is_country_enabled(code: &str) -> bool {
    let feature = format!("CARGO_FEATURE_{code}");
    std::env::var(&feature).is_ok()
}

impl Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Country::{}", self.code)
    }
}

pub const fn days_from_civil(y: i64, m: i64, d: i64) -> i64 {
    // Source: https://howardhinnant.github.io/date_algorithms.html
    let adjusted_year = y - if m <= 2 { 1 } else { 0 };

    let era = if adjusted_year >= 0 {
        adjusted_year / 400
    } else {
        (adjusted_year - 399) / 400
    };

    let year_of_era = adjusted_year - era * 400;
    let month_part = if m > 2 { m - 3 } else { m + 9 };
    let day_of_year = (153 * month_part + 2) / 5 + d - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * 146097 + day_of_era - 719468
}

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TableKey {
    observance: u8,
    year: i32,
}
impl Hash for TableKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.observance.hash(state);
        self.year.hash(state);
    }
}
impl phf_shared::PhfHash for TableKey {
    fn phf_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.observance.hash(state);
        self.year.hash(state);
    }
}
impl phf_shared::FmtConst for TableKey {
    fn fmt_const(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (_, variant) = OBSERVANCES[self.observance as usize];
        write!(f, "TableKey(Observance::{variant}, {})", self.year)
    }
}

struct IslamicRow {
    key: TableKey,
    day_index: i64,
}

fn parse_islamic_row(row: StringRecord) -> IslamicRow {
    let mut it = row.iter();

    let name = it.next().expect("invalid row in islamic.csv");
    let observance = OBSERVANCES
        .iter()
        .position(|(csv_name, _)| *csv_name == name)
        .unwrap_or_else(|| panic!("unknown observance {name} in islamic.csv"))
        as u8;

    let mut number = || -> i64 {
        it.next()
            .expect("invalid row in islamic.csv")
            .parse()
            .expect("invalid number in islamic.csv")
    };
    let (year, month, day) = (number(), number(), number());

    IslamicRow {
        key: TableKey {
            observance,
            year: year as i32,
        },
        day_index: days_from_civil(year, month, day),
    }
}

fn open_csv(path: &Path) -> csv::Reader<BufReader<File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(match File::open(path) {
            Ok(it) => it,
            Err(_) => {
                panic!("missing {}", path.display())
            }
        }))
}

fn gen_country_enum_decl<'a, W: Write, C: Iterator<Item = &'a Country>>(
    out: &mut W,
    countries: C,
) -> std::io::Result<()> {
    let mut reverse_lookup = phf_codegen::Map::<&str>::new();

    out.write_all(b"declare_countries![\n")?;
    for c in countries {
        writeln!(
            out,
            "{0}: \"{0}\" \"{1}\" \"{2}\" {3},",
            c.code, c.alpha3, c.name, c.index
        )?;
        reverse_lookup.entry(&c.code, format!("Country::{}", c.code));
        reverse_lookup.entry(&c.alpha3, format!("Country::{}", c.code));
        reverse_lookup.entry(&c.name, format!("Country::{}", c.code));
    }
    out.write_all(b"];\n")?;

    write!(
        out,
        "pub(crate) static CODE_TO_COUNTRY: phf::Map<&'static str, Country> = {}",
        reverse_lookup.build()
    )?;
    writeln!(out, ";")?;

    Ok(())
}

fn gen_islamic_table<W: Write>(out: &mut W, rows: Vec<IslamicRow>) -> std::io::Result<()> {
    let mut grouped: BTreeMap<TableKey, Vec<i64>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.key).or_default().push(row.day_index);
    }

    let min_year = grouped.keys().map(|it| it.year).min().unwrap_or(0);
    let max_year = grouped.keys().map(|it| it.year).max().unwrap_or(0);
    writeln!(out, "pub(crate) const ISLAMIC_MIN_YEAR: i32 = {min_year};")?;
    writeln!(out, "pub(crate) const ISLAMIC_MAX_YEAR: i32 = {max_year};")?;

    let mut exact_lookup = phf_codegen::Map::<TableKey>::new();
    for (key, mut days) in grouped {
        days.sort_unstable();
        let dates = days
            .iter()
            .map(|it| format!("Date({it})"))
            .fold("".to_string(), |acc, it| acc + it.as_str() + ",");
        exact_lookup.entry(key, format!("&[{dates}]"));
    }

    write!(
        out,
        "pub(crate) static ISLAMIC_DATES: phf::Map<TableKey, &'static [Date]> = {}",
        exact_lookup.build()
    )?;
    writeln!(out, ";")?;

    Ok(())
}

fn main() {
    let root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    println!("cargo:rerun-if-changed=countries.csv");
    println!("cargo:rerun-if-changed=islamic.csv");

    let mut countries: Vec<Country> = open_csv(&root.join("countries.csv"))
        .records()
        .filter_map(Result::ok)
        .map(|it| {
            let mut it = it.iter().map(String::from);
            (
                it.next().expect("invalid row countries.csv"),
                it.next().expect("invalid row countries.csv"),
                it.next().expect("invalid row countries.csv"),
            )
        })
        .filter(|(code, _, _)| is_country_enabled(code))
        .map(|(code, alpha3, name)| Country {
            index: 0,
            code,
            alpha3,
            name,
        })
        .collect();
    countries.sort_by(|a, b| a.code.cmp(&b.code));
    countries.iter_mut().enumerate().for_each(|(i, it)| {
        it.index = i as u16;
    });

    let out_dir = PathBuf::from(&std::env::var("OUT_DIR").unwrap());
    let countries_out = out_dir.join("decl_countries.rs");
    let mut countries_out =
        BufWriter::new(File::create(countries_out).expect("unable to create decl_countries.rs"));
    gen_country_enum_decl(&mut countries_out, countries.iter()).unwrap();

    let islamic: Vec<IslamicRow> = open_csv(&root.join("islamic.csv"))
        .records()
        .filter_map(Result::ok)
        .map(parse_islamic_row)
        .collect();

    let islamic_out = out_dir.join("islamic_data.rs");
    let mut islamic_out =
        BufWriter::new(File::create(islamic_out).expect("unable to create islamic_data.rs"));
    gen_islamic_table(&mut islamic_out, islamic).unwrap();
}
