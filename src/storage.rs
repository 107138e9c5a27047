//! Line-oriented text format for the contacts file.
//!
//! One record block per contact, blocks concatenated with no separator:
//!
//! ```text
//! CONTACT
//! <last name>
//! <first name>
//! <middle name>
//! <address>
//! <birth date YYYY-MM-DD>
//! <email>
//! <phone count>
//! <number>|<type>        (phone count times)
//! ```
//!
//! Loading is all-or-nothing for structural damage (a record cut short before
//! its phone count, or a phone count that isn't a number) but tolerant of bad
//! phone lines: a line without `|` drops only that phone, and running out of
//! lines inside the phone list keeps the phones read so far.
//!
//! Fields are written verbatim. A newline in any field, or a `|` in a phone
//! number, will not survive a save/load cycle. Neither will a `\r` at the end
//! of a line-final field (the six text fields): on load it reads as a CRLF
//! line ending and is dropped.

use crate::error::{StorageError, StorageResult};
use crate::models::{Contact, Date, PhoneNumber, PhoneType};
use crate::validation::trim;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Line that opens every record block.
pub const RECORD_MARKER: &str = "CONTACT";

const FIELD_NAMES: [&str; 6] = [
    "last name",
    "first name",
    "middle name",
    "address",
    "birth date",
    "email",
];

/// Parse contacts from the text of a contacts file.
pub fn parse(input: &str) -> StorageResult<Vec<Contact>> {
    let mut lines = input.lines();
    let mut contacts = Vec::new();

    while let Some(line) = lines.next() {
        if line != RECORD_MARKER {
            continue;
        }

        let mut fields: [&str; 6] = [""; 6];
        for (slot, name) in fields.iter_mut().zip(FIELD_NAMES) {
            *slot = lines.next().ok_or_else(|| {
                warn!(record = contacts.len(), "Record truncated before {} line", name);
                StorageError::Truncated { field: name }
            })?;
        }

        let count_line = lines.next().ok_or_else(|| {
            warn!(record = contacts.len(), "Record truncated before phone count");
            StorageError::Truncated {
                field: "phone count",
            }
        })?;
        let phone_count: usize = trim(count_line).parse().map_err(|_| {
            warn!(record = contacts.len(), "Invalid phone count {:?}", count_line);
            StorageError::InvalidPhoneCount(count_line.to_string())
        })?;

        let [last_name, first_name, middle_name, address, birth_date, email] = fields;
        let mut contact = Contact::new(
            last_name,
            first_name,
            middle_name,
            address,
            Date::parse(birth_date),
            email,
        );

        for _ in 0..phone_count {
            let Some(phone_line) = lines.next() else {
                debug!(
                    record = contacts.len(),
                    "Phone list cut short after {} of {} entries",
                    contact.phones.len(),
                    phone_count
                );
                break;
            };
            match parse_phone_line(phone_line) {
                Some(phone) => contact.add_phone(phone),
                None => debug!(
                    record = contacts.len(),
                    "Skipping phone line without separator: {:?}", phone_line
                ),
            }
        }

        contacts.push(contact);
    }

    Ok(contacts)
}

/// Split a `number|type` line on its first `|`. The number is kept verbatim.
fn parse_phone_line(line: &str) -> Option<PhoneNumber> {
    let (number, phone_type) = line.split_once('|')?;
    Some(PhoneNumber::new(number, PhoneType::parse(trim(phone_type))))
}

/// Contacts rendered in file format through `Display`.
struct Records<'a>(&'a [Contact]);

impl fmt::Display for Records<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for contact in self.0 {
            writeln!(f, "{}", RECORD_MARKER)?;
            writeln!(f, "{}", contact.last_name)?;
            writeln!(f, "{}", contact.first_name)?;
            writeln!(f, "{}", contact.middle_name)?;
            writeln!(f, "{}", contact.address)?;
            writeln!(f, "{}", contact.birth_date)?;
            writeln!(f, "{}", contact.email)?;
            writeln!(f, "{}", contact.phones.len())?;
            for phone in &contact.phones {
                writeln!(f, "{}|{}", phone.number, phone.phone_type)?;
            }
        }
        Ok(())
    }
}

/// Write contacts in file format.
pub fn write<W: Write>(mut writer: W, contacts: &[Contact]) -> io::Result<()> {
    write!(writer, "{}", Records(contacts))?;
    writer.flush()
}

/// Render contacts in file format.
pub fn to_string(contacts: &[Contact]) -> String {
    Records(contacts).to_string()
}

/// Load contacts from `path`.
///
/// A missing file is an empty directory, not an error.
pub fn load(path: impl AsRef<Path>) -> StorageResult<Vec<Contact>> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Contacts file {} does not exist, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let text = String::from_utf8(bytes).map_err(|_| StorageError::InvalidEncoding)?;
    let contacts = parse(&text)?;

    info!("Loaded {} contacts from {}", contacts.len(), path.display());
    Ok(contacts)
}

/// Save contacts to `path`, replacing its previous contents.
///
/// The file is truncated and rewritten in place; a failure part-way leaves a
/// partial file behind.
pub fn save(path: impl AsRef<Path>, contacts: &[Contact]) -> StorageResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write(BufWriter::new(file), contacts)?;

    info!("Saved {} contacts to {}", contacts.len(), path.display());
    Ok(())
}
