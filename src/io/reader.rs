use std::io::{self, BufRead};

use tracing::warn;

use crate::domain::{account::Account, record::Record};

#[derive(serde::Deserialize)]
/// Internal CSV row representation: `name,account_number,balance`, no header.
struct CsvRow {
    name: String,
    account_number: String,
    balance: String,
}

/// Reads account records from the accounts file, one per line, in file order.
///
/// Each physical line is decoded on its own, so a stray quote can never pull
/// the following lines into one field. Lines with three fields whose number
/// and balance parse become [`Record::Account`]; every other line is kept as
/// [`Record::Malformed`] holding the raw text. Blank lines are skipped. Only
/// I/O and encoding problems surface as errors.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::reader::read_records;
/// use bank_ledger::domain::record::Record;
///
/// let data = "Bob,1234567890,75.5\n\"Q Smith,1111111111,1.0\n";
/// let records: Vec<_> = read_records(data.as_bytes()).collect::<Result<_, _>>().unwrap();
///
/// assert!(matches!(&records[0], Record::Account(acc) if acc.name == "Bob"));
/// assert_eq!(records[1], Record::Malformed("\"Q Smith,1111111111,1.0".into()));
/// ```
pub fn read_records<R: BufRead>(input: R) -> impl Iterator<Item = Result<Record, io::Error>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Err(e) => Some(Err(e)),
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(Ok(parse_line(line, idx + 1))),
        })
}

fn parse_line(line: String, line_no: usize) -> Record {
    match parse_account(&line) {
        Ok(acc) => Record::Account(acc),
        Err(reason) => {
            warn!(line = line_no, %reason, "keeping malformed account line as-is");
            Record::Malformed(line)
        }
    }
}

fn parse_account(line: &str) -> Result<Account, String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());
    let raw = match rdr.records().next() {
        Some(res) => res.map_err(|e| e.to_string())?,
        None => return Err("no fields".into()),
    };
    if raw.len() != 3 {
        return Err(format!("expected 3 fields, found {}", raw.len()));
    }

    let row: CsvRow = raw.deserialize(None).map_err(|e| e.to_string())?;
    let number = row
        .account_number
        .parse()
        .map_err(|e| format!("bad account number: {e}"))?;
    let balance = row
        .balance
        .parse()
        .map_err(|e| format!("bad balance {:?}: {e}", row.balance))?;

    Ok(Account {
        name: row.name,
        number,
        balance,
    })
}
