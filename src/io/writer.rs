use std::io::Write;

use crate::domain::{ledger::Ledger, record::Record};

#[derive(serde::Serialize)]
/// Internal CSV output row, the counterpart of the reader's row.
///
/// Columns written (in this order, no header): `name,account_number,balance`.
struct OutputRow<'a> {
    name: &'a str,
    account_number: String,
    balance: String,
}

/// Writes every ledger record to a CSV writer, in ledger order.
///
/// Names containing the delimiter or quotes are quoted so they read back
/// intact. Malformed records are written back as the raw line they were
/// read from.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_ledger::domain::{account::Account, ledger::Ledger};
/// use bank_ledger::io::writer::write_ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.push(Account::open("Bob", "1234567890".parse().unwrap()));
///
/// let mut out = Vec::new();
/// write_ledger(&mut out, &ledger).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Bob,1234567890,0.0\n");
/// ```
pub fn write_ledger<W: Write>(writer: W, ledger: &Ledger) -> Result<(), csv::Error> {
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false).flexible(true);
    let mut wtr = builder.from_writer(writer);

    for record in ledger.records() {
        match record {
            Record::Account(acc) => wtr.serialize(OutputRow {
                name: &acc.name,
                account_number: acc.number.to_string(),
                balance: acc.balance.to_string(),
            })?,
            Record::Malformed(line) => {
                let mut out = wtr.into_inner().map_err(|e| e.into_error())?;
                out.write_all(line.as_bytes())?;
                out.write_all(b"\n")?;
                wtr = builder.from_writer(out);
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
