use serde::Serialize;

/// One health record.
///
/// Fields are opaque text, assumed free of the separator characters (comma,
/// newline). They are stored verbatim: no validation, no escaping, no
/// percent-decoding of submitted form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub disease: String,
}

/// Errors from parsing an `/add` form body.
#[derive(Debug, PartialEq, Eq)]
pub enum FormError {
    /// The body did not split into exactly four `&`-separated segments.
    WrongFieldCount,
    /// A segment carried no `=`.
    MissingValue,
}

impl Record {
    /// Parses a body of the form `name=<v>&age=<v>&gender=<v>&disease=<v>`.
    ///
    /// Fields are positional: the body is split on `&`, each segment on its
    /// first `=`, and the values are taken in order regardless of the key
    /// names. A value containing `&` or `=` corrupts parsing.
    pub fn parse_form(body: &str) -> Result<Record, FormError> {
        let mut segments = body.split('&');

        let (Some(name), Some(age), Some(gender), Some(disease), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(FormError::WrongFieldCount);
        };

        Ok(Record {
            name: form_value(name)?,
            age: form_value(age)?,
            gender: form_value(gender)?,
            disease: form_value(disease)?,
        })
    }

    /// Parses one store-file line. Lines that do not split into exactly
    /// four comma-separated fields are not records.
    pub fn from_line(line: &str) -> Option<Record> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 4 {
            return None;
        }

        Some(Record {
            name: fields[0].to_string(),
            age: fields[1].to_string(),
            gender: fields[2].to_string(),
            disease: fields[3].to_string(),
        })
    }

    /// The store-file form of the record, without the trailing newline.
    pub fn to_line(&self) -> String {
        format!("{},{},{},{}", self.name, self.age, self.gender, self.disease)
    }
}

fn form_value(segment: &str) -> Result<String, FormError> {
    segment
        .split_once('=')
        .map(|(_key, value)| value.to_string())
        .ok_or(FormError::MissingValue)
}

/// A record as returned by the listing endpoint, with its positional id.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListedRecord {
    pub id: usize,
    pub name: String,
    pub age: String,
    pub gender: String,
    pub disease: String,
}

impl ListedRecord {
    pub fn new(id: usize, record: Record) -> Self {
        Self {
            id,
            name: record.name,
            age: record.age,
            gender: record.gender,
            disease: record.disease,
        }
    }
}
