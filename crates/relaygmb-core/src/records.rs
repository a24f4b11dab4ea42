//! Row types for both sides of a conversion run.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::schema::DestinationColumn;

/// One scalar spreadsheet cell.
///
/// Spreadsheet readers hand back text, numbers, or nothing; time-of-day cells
/// arrive as fractional-day numbers (`0.5` is noon).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl CellValue {
    /// `true` for [`CellValue::Empty`] and for text that is empty or whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(_) => false,
            CellValue::Text(s) => s.trim().is_empty(),
        }
    }

    /// Text rendering of the cell.
    ///
    /// Whole numbers are printed without a decimal part so that numeric store
    /// codes and postal codes (`75001.0`) come back as `"75001"`.
    #[must_use]
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
            CellValue::Number(n) => Cow::Owned(format_number(*n)),
        }
    }

    /// Numeric reading of the cell; text is parsed after trimming.
    ///
    /// Returns `None` for empty cells and unparseable text.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

// Whole numbers within i64 range print without ".0"; anything else keeps
// its shortest round-trip form.
#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One row of the courier export, keyed by header text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    cells: BTreeMap<String, CellValue>,
}

impl SourceRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Cell under `column`, or [`CellValue::Empty`] when the column is absent.
    #[must_use]
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&EMPTY_CELL)
    }

    /// Text of the cell under `column`; `""` when absent.
    #[must_use]
    pub fn text(&self, column: &str) -> Cow<'_, str> {
        self.get(column).as_text()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for SourceRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One listing in the GMB bulk-import template.
///
/// Every template column is a field, so a record can never be missing a key;
/// columns the conversion cannot fill stay as empty strings. Serialized names
/// are the exact template headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationRecord {
    #[serde(rename = "Code de magasin")]
    pub store_code: String,
    #[serde(rename = "Nom de l'entreprise")]
    pub business_name: String,
    #[serde(rename = "Ligne d'adresse\u{a0}1")]
    pub address_line_1: String,
    #[serde(rename = "Ligne d'adresse\u{a0}2")]
    pub address_line_2: String,
    #[serde(rename = "Ligne d'adresse\u{a0}3")]
    pub address_line_3: String,
    #[serde(rename = "Ligne d'adresse\u{a0}4")]
    pub address_line_4: String,
    #[serde(rename = "Ligne d'adresse\u{a0}5")]
    pub address_line_5: String,
    #[serde(rename = "Sous-localité")]
    pub sublocality: String,
    #[serde(rename = "Localité")]
    pub locality: String,
    #[serde(rename = "Région administrative")]
    pub administrative_area: String,
    #[serde(rename = "Pays/Région")]
    pub country_region: String,
    #[serde(rename = "Code postal")]
    pub postal_code: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Numéro principal")]
    pub primary_phone: String,
    #[serde(rename = "Autres numéros de téléphone")]
    pub additional_phones: String,
    #[serde(rename = "Site Web")]
    pub website: String,
    #[serde(rename = "Catégorie principale")]
    pub primary_category: String,
    #[serde(rename = "Catégories supplémentaires")]
    pub additional_categories: String,
    #[serde(rename = "Horaires le dimanche")]
    pub hours_sunday: String,
    #[serde(rename = "Horaires le lundi")]
    pub hours_monday: String,
    #[serde(rename = "Horaires le mardi")]
    pub hours_tuesday: String,
    #[serde(rename = "Horaires le mercredi")]
    pub hours_wednesday: String,
    #[serde(rename = "Horaires le jeudi")]
    pub hours_thursday: String,
    #[serde(rename = "Horaires le vendredi")]
    pub hours_friday: String,
    #[serde(rename = "Horaires le samedi")]
    pub hours_saturday: String,
    #[serde(rename = "Horaires d'ouverture exceptionnels")]
    pub special_hours: String,
    /// Free-text description shown on the listing.
    #[serde(rename = "Fournie par l'établissement")]
    pub from_the_business: String,
    #[serde(rename = "Date de création")]
    pub opening_date: String,
    #[serde(rename = "Photo du logo")]
    pub logo_photo: String,
    #[serde(rename = "Photo de couverture")]
    pub cover_photo: String,
    #[serde(rename = "Autres photos")]
    pub other_photos: String,
    #[serde(rename = "Libellés")]
    pub labels: String,
    #[serde(rename = "Numéro de téléphone pour les extensions de lieu AdWords")]
    pub adwords_phone: String,
    #[serde(
        rename = "Fournis par l'établissement: S'identifie comme géré par une femme (is_owned_by_women)"
    )]
    pub owned_by_women: String,
    #[serde(
        rename = "Paiements: Cartes de crédit (pay_credit_card_types_accepted): American Express (american_express)"
    )]
    pub pay_american_express: String,
    #[serde(
        rename = "Paiements: Cartes de crédit (pay_credit_card_types_accepted): MasterCard (mastercard)"
    )]
    pub pay_mastercard: String,
    #[serde(rename = "Paiements: Cartes de crédit (pay_credit_card_types_accepted): VISA (visa)")]
    pub pay_visa: String,
    #[serde(rename = "Services: Wi-Fi (wi_fi)")]
    pub wi_fi: String,
    #[serde(
        rename = "URL des pages Google\u{a0}Adresses: Lien du menu ou des services (url_menu)"
    )]
    pub url_menu: String,
    #[serde(
        rename = "URL des pages Google\u{a0}Adresses: Liens pour commander à l'avance (url_order_ahead)"
    )]
    pub url_order_ahead: String,
}

impl DestinationRecord {
    /// Text value of a column; `None` for the numeric coordinate columns.
    #[must_use]
    pub fn text(&self, column: DestinationColumn) -> Option<&str> {
        let value = match column {
            DestinationColumn::Latitude | DestinationColumn::Longitude => return None,
            DestinationColumn::StoreCode => &self.store_code,
            DestinationColumn::BusinessName => &self.business_name,
            DestinationColumn::AddressLine1 => &self.address_line_1,
            DestinationColumn::AddressLine2 => &self.address_line_2,
            DestinationColumn::AddressLine3 => &self.address_line_3,
            DestinationColumn::AddressLine4 => &self.address_line_4,
            DestinationColumn::AddressLine5 => &self.address_line_5,
            DestinationColumn::Sublocality => &self.sublocality,
            DestinationColumn::Locality => &self.locality,
            DestinationColumn::AdministrativeArea => &self.administrative_area,
            DestinationColumn::CountryRegion => &self.country_region,
            DestinationColumn::PostalCode => &self.postal_code,
            DestinationColumn::PrimaryPhone => &self.primary_phone,
            DestinationColumn::AdditionalPhones => &self.additional_phones,
            DestinationColumn::Website => &self.website,
            DestinationColumn::PrimaryCategory => &self.primary_category,
            DestinationColumn::AdditionalCategories => &self.additional_categories,
            DestinationColumn::HoursSunday => &self.hours_sunday,
            DestinationColumn::HoursMonday => &self.hours_monday,
            DestinationColumn::HoursTuesday => &self.hours_tuesday,
            DestinationColumn::HoursWednesday => &self.hours_wednesday,
            DestinationColumn::HoursThursday => &self.hours_thursday,
            DestinationColumn::HoursFriday => &self.hours_friday,
            DestinationColumn::HoursSaturday => &self.hours_saturday,
            DestinationColumn::SpecialHours => &self.special_hours,
            DestinationColumn::FromTheBusiness => &self.from_the_business,
            DestinationColumn::OpeningDate => &self.opening_date,
            DestinationColumn::LogoPhoto => &self.logo_photo,
            DestinationColumn::CoverPhoto => &self.cover_photo,
            DestinationColumn::OtherPhotos => &self.other_photos,
            DestinationColumn::Labels => &self.labels,
            DestinationColumn::AdwordsPhone => &self.adwords_phone,
            DestinationColumn::OwnedByWomen => &self.owned_by_women,
            DestinationColumn::PayAmericanExpress => &self.pay_american_express,
            DestinationColumn::PayMastercard => &self.pay_mastercard,
            DestinationColumn::PayVisa => &self.pay_visa,
            DestinationColumn::WiFi => &self.wi_fi,
            DestinationColumn::UrlMenu => &self.url_menu,
            DestinationColumn::UrlOrderAhead => &self.url_order_ahead,
        };
        Some(value.as_str())
    }

    /// Mutable text value of a column; `None` for the numeric coordinate columns.
    pub fn text_mut(&mut self, column: DestinationColumn) -> Option<&mut String> {
        let value = match column {
            DestinationColumn::Latitude | DestinationColumn::Longitude => return None,
            DestinationColumn::StoreCode => &mut self.store_code,
            DestinationColumn::BusinessName => &mut self.business_name,
            DestinationColumn::AddressLine1 => &mut self.address_line_1,
            DestinationColumn::AddressLine2 => &mut self.address_line_2,
            DestinationColumn::AddressLine3 => &mut self.address_line_3,
            DestinationColumn::AddressLine4 => &mut self.address_line_4,
            DestinationColumn::AddressLine5 => &mut self.address_line_5,
            DestinationColumn::Sublocality => &mut self.sublocality,
            DestinationColumn::Locality => &mut self.locality,
            DestinationColumn::AdministrativeArea => &mut self.administrative_area,
            DestinationColumn::CountryRegion => &mut self.country_region,
            DestinationColumn::PostalCode => &mut self.postal_code,
            DestinationColumn::PrimaryPhone => &mut self.primary_phone,
            DestinationColumn::AdditionalPhones => &mut self.additional_phones,
            DestinationColumn::Website => &mut self.website,
            DestinationColumn::PrimaryCategory => &mut self.primary_category,
            DestinationColumn::AdditionalCategories => &mut self.additional_categories,
            DestinationColumn::HoursSunday => &mut self.hours_sunday,
            DestinationColumn::HoursMonday => &mut self.hours_monday,
            DestinationColumn::HoursTuesday => &mut self.hours_tuesday,
            DestinationColumn::HoursWednesday => &mut self.hours_wednesday,
            DestinationColumn::HoursThursday => &mut self.hours_thursday,
            DestinationColumn::HoursFriday => &mut self.hours_friday,
            DestinationColumn::HoursSaturday => &mut self.hours_saturday,
            DestinationColumn::SpecialHours => &mut self.special_hours,
            DestinationColumn::FromTheBusiness => &mut self.from_the_business,
            DestinationColumn::OpeningDate => &mut self.opening_date,
            DestinationColumn::LogoPhoto => &mut self.logo_photo,
            DestinationColumn::CoverPhoto => &mut self.cover_photo,
            DestinationColumn::OtherPhotos => &mut self.other_photos,
            DestinationColumn::Labels => &mut self.labels,
            DestinationColumn::AdwordsPhone => &mut self.adwords_phone,
            DestinationColumn::OwnedByWomen => &mut self.owned_by_women,
            DestinationColumn::PayAmericanExpress => &mut self.pay_american_express,
            DestinationColumn::PayMastercard => &mut self.pay_mastercard,
            DestinationColumn::PayVisa => &mut self.pay_visa,
            DestinationColumn::WiFi => &mut self.wi_fi,
            DestinationColumn::UrlMenu => &mut self.url_menu,
            DestinationColumn::UrlOrderAhead => &mut self.url_order_ahead,
        };
        Some(value)
    }

    /// Coordinate value of a column; `None` for text columns.
    #[must_use]
    pub fn number(&self, column: DestinationColumn) -> Option<f64> {
        match column {
            DestinationColumn::Latitude => Some(self.latitude),
            DestinationColumn::Longitude => Some(self.longitude),
            _ => None,
        }
    }

    /// Assign a raw spreadsheet cell to a column.
    ///
    /// Coordinates that do not parse become `0.0`; text columns take the
    /// cell's text rendering.
    pub fn set_cell(&mut self, column: DestinationColumn, cell: &CellValue) {
        match column {
            DestinationColumn::Latitude => self.latitude = cell.as_number().unwrap_or(0.0),
            DestinationColumn::Longitude => self.longitude = cell.as_number().unwrap_or(0.0),
            _ => {
                if let Some(slot) = self.text_mut(column) {
                    *slot = cell.as_text().into_owned();
                }
            }
        }
    }
}
