//! Proxy countries accepted by the API

use serde::Serialize;

/// One proxy-country option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProxyCountry {
    /// Display name
    pub name: &'static str,
    /// Value sent as `proxy_country`
    pub value: &'static str,
}

impl ProxyCountry {
    const fn new(name: &'static str, value: &'static str) -> Self {
        Self { name, value }
    }

    /// Find an option by its wire value
    pub fn lookup(value: &str) -> Option<&'static ProxyCountry> {
        PROXY_COUNTRIES.iter().find(|country| country.value == value)
    }
}

/// Value that lets the API pick its default route
pub const DEFAULT_PROXY_COUNTRY: &str = "";

/// Every option, default and random first
pub static PROXY_COUNTRIES: &[ProxyCountry] = &[
    ProxyCountry::new("Default", ""),
    ProxyCountry::new("Random Country", "random"),
    ProxyCountry::new("Afghanistan", "Afghanistan"),
    ProxyCountry::new("Albania", "Albania"),
    ProxyCountry::new("Algeria", "Algeria"),
    ProxyCountry::new("Argentina", "Argentina"),
    ProxyCountry::new("Armenia", "Armenia"),
    ProxyCountry::new("Aruba", "Aruba"),
    ProxyCountry::new("Australia", "Australia"),
    ProxyCountry::new("Austria", "Austria"),
    ProxyCountry::new("Azerbaijan", "Azerbaijan"),
    ProxyCountry::new("Bahamas", "Bahamas"),
    ProxyCountry::new("Bahrain", "Bahrain"),
    ProxyCountry::new("Bangladesh", "Bangladesh"),
    ProxyCountry::new("Belarus", "Belarus"),
    ProxyCountry::new("Belgium", "Belgium"),
    ProxyCountry::new("Bosnia and Herzegovina", "BosniaandHerzegovina"),
    ProxyCountry::new("Brazil", "Brazil"),
    ProxyCountry::new("British Virgin Islands", "BritishVirginIslands"),
    ProxyCountry::new("Brunei", "Brunei"),
    ProxyCountry::new("Bulgaria", "Bulgaria"),
    ProxyCountry::new("Cambodia", "Cambodia"),
    ProxyCountry::new("Cameroon", "Cameroon"),
    ProxyCountry::new("Canada", "Canada"),
    ProxyCountry::new("Chile", "Chile"),
    ProxyCountry::new("China", "China"),
    ProxyCountry::new("Colombia", "Colombia"),
    ProxyCountry::new("Costa Rica", "CostaRica"),
    ProxyCountry::new("Croatia", "Croatia"),
    ProxyCountry::new("Cuba", "Cuba"),
    ProxyCountry::new("Cyprus", "Cyprus"),
    ProxyCountry::new("Chechia", "Chechia"),
    ProxyCountry::new("Denmark", "Denmark"),
    ProxyCountry::new("Dominican Republic", "DominicanRepublic"),
    ProxyCountry::new("Ecuador", "Ecuador"),
    ProxyCountry::new("Egypt", "Egypt"),
    ProxyCountry::new("El Salvador", "ElSalvador"),
    ProxyCountry::new("Estonia", "Estonia"),
    ProxyCountry::new("Ethiopia", "Ethiopia"),
    ProxyCountry::new("Finland", "Finland"),
    ProxyCountry::new("France", "France"),
    ProxyCountry::new("Georgia", "Georgia"),
    ProxyCountry::new("Germany", "Germany"),
    ProxyCountry::new("Ghana", "Ghana"),
    ProxyCountry::new("Greece", "Greece"),
    ProxyCountry::new("Guatemala", "Guatemala"),
    ProxyCountry::new("Guyana", "Guyana"),
    ProxyCountry::new("Hashemite Kingdom of Jordan", "HashemiteKingdomofJordan"),
    ProxyCountry::new("Hong Kong", "HongKong"),
    ProxyCountry::new("Hungary", "Hungary"),
    ProxyCountry::new("India", "India"),
    ProxyCountry::new("Indonesia", "Indonesia"),
    ProxyCountry::new("Iraq", "Iraq"),
    ProxyCountry::new("Ireland", "Ireland"),
    ProxyCountry::new("Israel", "Israel"),
    ProxyCountry::new("Italy", "Italy"),
    ProxyCountry::new("Jamaica", "Jamaica"),
    ProxyCountry::new("Japan", "Japan"),
    ProxyCountry::new("Kazakhstan", "Kazakhstan"),
    ProxyCountry::new("Kenya", "Kenya"),
    ProxyCountry::new("Kuwait", "Kuwait"),
    ProxyCountry::new("Latvia", "Latvia"),
    ProxyCountry::new("Liechtenstein", "Liechtenstein"),
    ProxyCountry::new("Luxembourg", "Luxembourg"),
    ProxyCountry::new("Macedonia", "Macedonia"),
    ProxyCountry::new("Madagascar", "Madagascar"),
    ProxyCountry::new("Malaysia", "Malaysia"),
    ProxyCountry::new("Mauritius", "Mauritius"),
    ProxyCountry::new("Mexico", "Mexico"),
    ProxyCountry::new("Mongolia", "Mongolia"),
    ProxyCountry::new("Montenegro", "Montenegro"),
    ProxyCountry::new("Morocco", "Morocco"),
    ProxyCountry::new("Mozambique", "Mozambique"),
    ProxyCountry::new("Myanmar", "Myanmar"),
    ProxyCountry::new("Nepal", "Nepal"),
    ProxyCountry::new("Netherlands", "Netherlands"),
    ProxyCountry::new("New Zealand", "NewZealand"),
    ProxyCountry::new("Nigeria", "Nigeria"),
    ProxyCountry::new("Norway", "Norway"),
    ProxyCountry::new("Oman", "Oman"),
    ProxyCountry::new("Pakistan", "Pakistan"),
    ProxyCountry::new("Panama", "Panama"),
    ProxyCountry::new("Papua New Guinea", "PapuaNewGuinea"),
    ProxyCountry::new("Paraguay", "Paraguay"),
    ProxyCountry::new("Peru", "Peru"),
    ProxyCountry::new("Philippines", "Philippines"),
    ProxyCountry::new("Poland", "Poland"),
    ProxyCountry::new("Portugal", "Portugal"),
    ProxyCountry::new("Puerto Rico", "PuertoRico"),
    ProxyCountry::new("Qatar", "Qatar"),
    ProxyCountry::new("Republic of Lithuania", "RepublicOfLithuania"),
    ProxyCountry::new("Republic of Moldova", "RepublicOfMoldova"),
    ProxyCountry::new("Romania", "Romania"),
    ProxyCountry::new("Russia", "Russia"),
    ProxyCountry::new("Saudi Arabia", "SaudiArabia"),
    ProxyCountry::new("Senegal", "Senegal"),
    ProxyCountry::new("Serbia", "Serbia"),
    ProxyCountry::new("Seychelles", "Seychelles"),
    ProxyCountry::new("Singapore", "Singapore"),
    ProxyCountry::new("Slovakia", "Slovakia"),
    ProxyCountry::new("Slovenia", "Slovenia"),
    ProxyCountry::new("Somalia", "Somalia"),
    ProxyCountry::new("South Africa", "SouthAfrica"),
    ProxyCountry::new("South Korea", "SouthKorea"),
    ProxyCountry::new("Spain", "Spain"),
    ProxyCountry::new("Sri Lanka", "SriLanka"),
    ProxyCountry::new("Sudan", "Sudan"),
    ProxyCountry::new("Suriname", "Suriname"),
    ProxyCountry::new("Sweden", "Sweden"),
    ProxyCountry::new("Switzerland", "Switzerland"),
    ProxyCountry::new("Syria", "Syria"),
    ProxyCountry::new("Taiwan", "Taiwan"),
    ProxyCountry::new("Tajikistan", "Tajikistan"),
    ProxyCountry::new("Thailand", "Thailand"),
    ProxyCountry::new("Trinidad and Tobago", "TrinidadandTobago"),
    ProxyCountry::new("Tunisia", "Tunisia"),
    ProxyCountry::new("Turkey", "Turkey"),
    ProxyCountry::new("Uganda", "Uganda"),
    ProxyCountry::new("Ukraine", "Ukraine"),
    ProxyCountry::new("United Arab Emirates", "UnitedArabEmirates"),
    ProxyCountry::new("United Kingdom", "UnitedKingdom"),
    ProxyCountry::new("United States", "UnitedStates"),
    ProxyCountry::new("Uzbekistan", "Uzbekistan"),
    ProxyCountry::new("Venezuela", "Venezuela"),
    ProxyCountry::new("Vietnam", "Vietnam"),
    ProxyCountry::new("Zambia", "Zambia"),
];
