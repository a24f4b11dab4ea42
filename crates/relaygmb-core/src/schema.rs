//! Column names for both spreadsheet schemas.
//!
//! Header strings are matched exactly (case- and accent-sensitive), so they
//! are spelled here once and referenced everywhere else.

/// Column names of the Mondial Relay point-relais export.
pub mod source {
    pub const TOUCHPOINT_ID: &str = "Numéro TouchPoint";
    pub const RELAY_ID: &str = "Numéro Relais";
    pub const BRAND: &str = "Enseigne";
    pub const ADDRESS_1: &str = "Adresse1";
    pub const ADDRESS_2: &str = "Adresse2";
    pub const ADDRESS_3: &str = "Adresse3";
    pub const ADDRESS_4: &str = "Adresse4";
    pub const CITY: &str = "Ville";
    pub const POSTAL_CODE: &str = "Code Postal";
    pub const DEPARTMENT: &str = "Intitulé Département";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const PHONE: &str = "Téléphone";

    /// Address fragments in the order they are compacted into address lines.
    pub const ADDRESS_FRAGMENTS: [&str; 4] = [ADDRESS_1, ADDRESS_2, ADDRESS_3, ADDRESS_4];

    /// Headers that must all be present for an export to be accepted.
    pub const REQUIRED_COLUMNS: [&str; 9] = [
        TOUCHPOINT_ID,
        BRAND,
        ADDRESS_1,
        CITY,
        POSTAL_CODE,
        DEPARTMENT,
        LATITUDE,
        LONGITUDE,
        PHONE,
    ];
}

/// Days of the week, in the order the courier export lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Which of the four per-day time columns to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    FirstStart,
    FirstEnd,
    SecondStart,
    SecondEnd,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// French day name as it appears in the courier's column headers.
    #[must_use]
    pub fn french_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Lundi",
            Weekday::Tuesday => "Mardi",
            Weekday::Wednesday => "Mercredi",
            Weekday::Thursday => "Jeudi",
            Weekday::Friday => "Vendredi",
            Weekday::Saturday => "Samedi",
            Weekday::Sunday => "Dimanche",
        }
    }

    /// Source header for one of this day's time columns,
    /// e.g. `"Heure Début 1ère Période Lundi"`.
    #[must_use]
    pub fn source_column(self, slot: TimeSlot) -> String {
        let (bound, period) = match slot {
            TimeSlot::FirstStart => ("Début", "1ère"),
            TimeSlot::FirstEnd => ("Fin", "1ère"),
            TimeSlot::SecondStart => ("Début", "2ème"),
            TimeSlot::SecondEnd => ("Fin", "2ème"),
        };
        format!("Heure {bound} {period} Période {}", self.french_name())
    }

    /// Destination column holding this day's schedule token.
    #[must_use]
    pub fn hours_column(self) -> DestinationColumn {
        match self {
            Weekday::Monday => DestinationColumn::HoursMonday,
            Weekday::Tuesday => DestinationColumn::HoursTuesday,
            Weekday::Wednesday => DestinationColumn::HoursWednesday,
            Weekday::Thursday => DestinationColumn::HoursThursday,
            Weekday::Friday => DestinationColumn::HoursFriday,
            Weekday::Saturday => DestinationColumn::HoursSaturday,
            Weekday::Sunday => DestinationColumn::HoursSunday,
        }
    }
}

/// Every column of the GMB bulk-import template, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinationColumn {
    StoreCode,
    BusinessName,
    AddressLine1,
    AddressLine2,
    AddressLine3,
    AddressLine4,
    AddressLine5,
    Sublocality,
    Locality,
    AdministrativeArea,
    CountryRegion,
    PostalCode,
    Latitude,
    Longitude,
    PrimaryPhone,
    AdditionalPhones,
    Website,
    PrimaryCategory,
    AdditionalCategories,
    HoursSunday,
    HoursMonday,
    HoursTuesday,
    HoursWednesday,
    HoursThursday,
    HoursFriday,
    HoursSaturday,
    SpecialHours,
    FromTheBusiness,
    OpeningDate,
    LogoPhoto,
    CoverPhoto,
    OtherPhotos,
    Labels,
    AdwordsPhone,
    OwnedByWomen,
    PayAmericanExpress,
    PayMastercard,
    PayVisa,
    WiFi,
    UrlMenu,
    UrlOrderAhead,
}

impl DestinationColumn {
    pub const ALL: [DestinationColumn; 41] = [
        DestinationColumn::StoreCode,
        DestinationColumn::BusinessName,
        DestinationColumn::AddressLine1,
        DestinationColumn::AddressLine2,
        DestinationColumn::AddressLine3,
        DestinationColumn::AddressLine4,
        DestinationColumn::AddressLine5,
        DestinationColumn::Sublocality,
        DestinationColumn::Locality,
        DestinationColumn::AdministrativeArea,
        DestinationColumn::CountryRegion,
        DestinationColumn::PostalCode,
        DestinationColumn::Latitude,
        DestinationColumn::Longitude,
        DestinationColumn::PrimaryPhone,
        DestinationColumn::AdditionalPhones,
        DestinationColumn::Website,
        DestinationColumn::PrimaryCategory,
        DestinationColumn::AdditionalCategories,
        DestinationColumn::HoursSunday,
        DestinationColumn::HoursMonday,
        DestinationColumn::HoursTuesday,
        DestinationColumn::HoursWednesday,
        DestinationColumn::HoursThursday,
        DestinationColumn::HoursFriday,
        DestinationColumn::HoursSaturday,
        DestinationColumn::SpecialHours,
        DestinationColumn::FromTheBusiness,
        DestinationColumn::OpeningDate,
        DestinationColumn::LogoPhoto,
        DestinationColumn::CoverPhoto,
        DestinationColumn::OtherPhotos,
        DestinationColumn::Labels,
        DestinationColumn::AdwordsPhone,
        DestinationColumn::OwnedByWomen,
        DestinationColumn::PayAmericanExpress,
        DestinationColumn::PayMastercard,
        DestinationColumn::PayVisa,
        DestinationColumn::WiFi,
        DestinationColumn::UrlMenu,
        DestinationColumn::UrlOrderAhead,
    ];

    /// Address line columns, first to fifth.
    pub const ADDRESS_LINES: [DestinationColumn; 5] = [
        DestinationColumn::AddressLine1,
        DestinationColumn::AddressLine2,
        DestinationColumn::AddressLine3,
        DestinationColumn::AddressLine4,
        DestinationColumn::AddressLine5,
    ];

    /// Exact header text in the French GMB template.
    ///
    /// Several headers contain a non-breaking space (`U+00A0`), matching the
    /// template Google distributes.
    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            DestinationColumn::StoreCode => "Code de magasin",
            DestinationColumn::BusinessName => "Nom de l'entreprise",
            DestinationColumn::AddressLine1 => "Ligne d'adresse\u{a0}1",
            DestinationColumn::AddressLine2 => "Ligne d'adresse\u{a0}2",
            DestinationColumn::AddressLine3 => "Ligne d'adresse\u{a0}3",
            DestinationColumn::AddressLine4 => "Ligne d'adresse\u{a0}4",
            DestinationColumn::AddressLine5 => "Ligne d'adresse\u{a0}5",
            DestinationColumn::Sublocality => "Sous-localité",
            DestinationColumn::Locality => "Localité",
            DestinationColumn::AdministrativeArea => "Région administrative",
            DestinationColumn::CountryRegion => "Pays/Région",
            DestinationColumn::PostalCode => "Code postal",
            DestinationColumn::Latitude => "Latitude",
            DestinationColumn::Longitude => "Longitude",
            DestinationColumn::PrimaryPhone => "Numéro principal",
            DestinationColumn::AdditionalPhones => "Autres numéros de téléphone",
            DestinationColumn::Website => "Site Web",
            DestinationColumn::PrimaryCategory => "Catégorie principale",
            DestinationColumn::AdditionalCategories => "Catégories supplémentaires",
            DestinationColumn::HoursSunday => "Horaires le dimanche",
            DestinationColumn::HoursMonday => "Horaires le lundi",
            DestinationColumn::HoursTuesday => "Horaires le mardi",
            DestinationColumn::HoursWednesday => "Horaires le mercredi",
            DestinationColumn::HoursThursday => "Horaires le jeudi",
            DestinationColumn::HoursFriday => "Horaires le vendredi",
            DestinationColumn::HoursSaturday => "Horaires le samedi",
            DestinationColumn::SpecialHours => "Horaires d'ouverture exceptionnels",
            DestinationColumn::FromTheBusiness => "Fournie par l'établissement",
            DestinationColumn::OpeningDate => "Date de création",
            DestinationColumn::LogoPhoto => "Photo du logo",
            DestinationColumn::CoverPhoto => "Photo de couverture",
            DestinationColumn::OtherPhotos => "Autres photos",
            DestinationColumn::Labels => "Libellés",
            DestinationColumn::AdwordsPhone => {
                "Numéro de téléphone pour les extensions de lieu AdWords"
            }
            DestinationColumn::OwnedByWomen => {
                "Fournis par l'établissement: S'identifie comme géré par une femme (is_owned_by_women)"
            }
            DestinationColumn::PayAmericanExpress => {
                "Paiements: Cartes de crédit (pay_credit_card_types_accepted): American Express (american_express)"
            }
            DestinationColumn::PayMastercard => {
                "Paiements: Cartes de crédit (pay_credit_card_types_accepted): MasterCard (mastercard)"
            }
            DestinationColumn::PayVisa => {
                "Paiements: Cartes de crédit (pay_credit_card_types_accepted): VISA (visa)"
            }
            DestinationColumn::WiFi => "Services: Wi-Fi (wi_fi)",
            DestinationColumn::UrlMenu => {
                "URL des pages Google\u{a0}Adresses: Lien du menu ou des services (url_menu)"
            }
            DestinationColumn::UrlOrderAhead => {
                "URL des pages Google\u{a0}Adresses: Liens pour commander à l'avance (url_order_ahead)"
            }
        }
    }

    /// Resolve a header cell back to its column.
    ///
    /// Spreadsheet editors often turn the template's non-breaking spaces into
    /// plain ones on re-save, so both spellings are accepted.
    #[must_use]
    pub fn from_header(header: &str) -> Option<Self> {
        let wanted = header.trim().replace('\u{a0}', " ");
        Self::ALL
            .into_iter()
            .find(|col| col.header().replace('\u{a0}', " ") == wanted)
    }

    /// Whether the column carries a number rather than text.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, DestinationColumn::Latitude | DestinationColumn::Longitude)
    }
}
