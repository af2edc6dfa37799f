//! Static content records rendered by the site.
//!
//! Everything here is authored as JSON under `content/` and embedded in the
//! binary at compile time. Nothing is mutated after the first parse.

use log::error;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("../content/catalog.json");
const PRIVACY_JSON: &str = include_str!("../content/privacy.json");
const TERMS_JSON: &str = include_str!("../content/terms.json");

static CATALOG: Lazy<Catalog> = Lazy::new(|| parse_or_default("catalog", CATALOG_JSON));
static PRIVACY: Lazy<LegalDocument> = Lazy::new(|| parse_or_default("privacy policy", PRIVACY_JSON));
static TERMS: Lazy<LegalDocument> = Lazy::new(|| parse_or_default("terms of service", TERMS_JSON));

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

pub fn privacy_policy() -> &'static LegalDocument {
    &PRIVACY
}

pub fn terms_of_service() -> &'static LegalDocument {
    &TERMS
}

// A broken document renders as empty sections rather than taking the page down.
fn parse_or_default<T: DeserializeOwned + Default>(name: &str, raw: &str) -> T {
    match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(err) => {
            error!("Failed to parse embedded {} content: {}", name, err);
            T::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    #[default]
    Shield,
    Lock,
    Eye,
    FileText,
    Users,
    Mail,
    Phone,
    MapPin,
    Anchor,
    Ship,
    Award,
    Scale,
    UserCheck,
    ShoppingCart,
    Truck,
    XCircle,
    CreditCard,
    Gift,
    Copyright,
    AlertTriangle,
    Store,
    Home,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Shield => "🛡",
            Icon::Lock => "🔒",
            Icon::Eye => "👁",
            Icon::FileText => "📄",
            Icon::Users => "👥",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "📍",
            Icon::Anchor => "⚓",
            Icon::Ship => "🚢",
            Icon::Award => "🏅",
            Icon::Scale => "⚖",
            Icon::UserCheck => "✔",
            Icon::ShoppingCart => "🛒",
            Icon::Truck => "🚚",
            Icon::XCircle => "✖",
            Icon::CreditCard => "💳",
            Icon::Gift => "🎁",
            Icon::Copyright => "©",
            Icon::AlertTriangle => "⚠",
            Icon::Store => "🏪",
            Icon::Home => "🏠",
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub hours: Option<String>,
}

impl ContactInfo {
    /// `tel:` link for the phone number, with the display spacing removed.
    pub fn tel_uri(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }

    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ImageItem {
    pub id: u32,
    pub image: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct FishVariety {
    pub id: String,
    pub name: String,
    pub local_name: String,
    pub image: String,
    pub alt: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub unit: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Catalog {
    pub contact: ContactInfo,
    pub about_features: Vec<Feature>,
    pub ocean_to_table: Vec<ImageItem>,
    pub about_image: ImageItem,
    pub fish_varieties: Vec<FishVariety>,
    pub business_pillars: Vec<Feature>,
    pub business_images: Vec<ImageItem>,
    pub pricing_plans: Vec<PricingPlan>,
}

impl Catalog {
    /// Images the home page warms up after mount: varieties first, then the
    /// business gallery, the about image and the ocean-to-table gallery.
    pub fn preload_urls(&self) -> Vec<&str> {
        self.fish_varieties
            .iter()
            .map(|fish| fish.image.as_str())
            .chain(self.business_images.iter().map(|item| item.image.as_str()))
            .chain(std::iter::once(self.about_image.image.as_str()))
            .chain(self.ocean_to_table.iter().map(|item| item.image.as_str()))
            .filter(|url| !url.is_empty())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bullet<'a> {
    Item(&'a str),
    SubItem(&'a str),
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PolicySection {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub icon: Option<Icon>,
    pub content: Vec<String>,
}

impl PolicySection {
    /// Lines written as `• text` are nested under the line before them.
    pub fn bullets(&self) -> impl Iterator<Item = Bullet<'_>> {
        self.content.iter().map(|line| match line.strip_prefix('•') {
            Some(rest) => Bullet::SubItem(rest.trim_start()),
            None => Bullet::Item(line.as_str()),
        })
    }

    pub fn heading(&self) -> String {
        format!("{}. {}", self.id, self.title)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ContactCard {
    pub icon: Icon,
    pub title: String,
    pub heading: String,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub address_lines: Vec<String>,
    #[serde(default)]
    pub response_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LegalDocument {
    pub heading: String,
    pub subtitle: String,
    pub last_updated: String,
    pub main_sections: Vec<PolicySection>,
    pub additional_sections: Vec<PolicySection>,
    pub contact_card: ContactCard,
    pub legal_notice: String,
}

impl LegalDocument {
    pub fn sections(&self) -> impl Iterator<Item = &PolicySection> {
        self.main_sections.iter().chain(self.additional_sections.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict<T: DeserializeOwned>(raw: &str) -> T {
        serde_json::from_str(raw).expect("embedded content should parse")
    }

    #[test]
    fn embedded_documents_parse() {
        let catalog: Catalog = strict(CATALOG_JSON);
        assert_eq!(catalog.about_features.len(), 4);
        assert_eq!(catalog.ocean_to_table.len(), 4);
        assert!(!catalog.fish_varieties.is_empty());

        let privacy: LegalDocument = strict(PRIVACY_JSON);
        assert_eq!(privacy.main_sections.len(), 6);
        assert_eq!(privacy.additional_sections.len(), 7);

        let terms: LegalDocument = strict(TERMS_JSON);
        assert_eq!(terms.main_sections.len(), 8);
        assert_eq!(terms.additional_sections.len(), 10);
    }

    #[test]
    fn accessors_return_the_embedded_content() {
        assert_eq!(catalog().contact.email, "info@kolicatch.io");
        assert_eq!(privacy_policy().heading, "Privacy Policy");
        assert_eq!(terms_of_service().heading, "Terms & Conditions");
    }

    #[test]
    fn policy_ids_run_from_one_without_gaps() {
        for doc in [privacy_policy(), terms_of_service()] {
            let ids: Vec<u32> = doc.sections().map(|s| s.id).collect();
            let expected: Vec<u32> = (1..=ids.len() as u32).collect();
            assert_eq!(ids, expected, "{}", doc.heading);
        }
    }

    #[test]
    fn main_policy_sections_carry_icons() {
        for doc in [privacy_policy(), terms_of_service()] {
            assert!(doc.main_sections.iter().all(|s| s.icon.is_some()));
            assert!(doc.additional_sections.iter().all(|s| s.icon.is_none()));
        }
    }

    #[test]
    fn content_strings_are_non_empty() {
        let catalog = catalog();
        let contact = &catalog.contact;
        assert!(!contact.phone.is_empty() && !contact.email.is_empty() && !contact.address.is_empty());
        for fish in &catalog.fish_varieties {
            for field in [&fish.id, &fish.name, &fish.local_name, &fish.image, &fish.alt] {
                assert!(!field.is_empty(), "variety {} has an empty field", fish.id);
            }
        }
        for item in catalog.ocean_to_table.iter().chain(&catalog.business_images) {
            assert!(!item.image.is_empty() && !item.alt.is_empty());
        }
        for doc in [privacy_policy(), terms_of_service()] {
            for section in doc.sections() {
                assert!(!section.title.is_empty());
                assert!(!section.content.is_empty());
                assert!(section.content.iter().all(|line| !line.trim().is_empty()));
            }
        }
    }

    #[test]
    fn variety_ids_are_unique() {
        let mut ids: Vec<&str> = catalog().fish_varieties.iter().map(|f| f.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn contact_links_strip_display_spacing() {
        let contact = ContactInfo {
            phone: "+91 96993 52316".to_string(),
            email: "info@kolicatch.io".to_string(),
            address: "Taloja MIDC".to_string(),
            hours: None,
        };
        assert_eq!(contact.tel_uri(), "tel:+919699352316");
        assert_eq!(contact.mailto_uri(), "mailto:info@kolicatch.io");
    }

    #[test]
    fn preload_order_follows_page_sections() {
        let catalog = catalog();
        let urls = catalog.preload_urls();
        let varieties = catalog.fish_varieties.len();

        assert_eq!(urls.len(), varieties + 2 + 1 + 4);
        assert_eq!(urls[0], catalog.fish_varieties[0].image);
        assert_eq!(&urls[varieties..varieties + 2], ["/images/business/fish-9.jpeg", "/images/business/fish-10.jpeg"]);
        assert_eq!(urls[varieties + 2], "/images/about/fish-on-table.png");
        assert_eq!(urls.last().copied(), catalog.ocean_to_table.last().map(|i| i.image.as_str()));
    }

    #[test]
    fn bullet_prefix_marks_sub_items() {
        let section = PolicySection {
            id: 7,
            title: "Data Security".to_string(),
            icon: None,
            content: vec![
                "We implement reasonable security practices including:".to_string(),
                "• Secure servers and access controls".to_string(),
            ],
        };
        let bullets: Vec<Bullet> = section.bullets().collect();
        assert_eq!(
            bullets,
            vec![
                Bullet::Item("We implement reasonable security practices including:"),
                Bullet::SubItem("Secure servers and access controls"),
            ]
        );
        assert_eq!(section.heading(), "7. Data Security");
    }

    #[test]
    fn malformed_content_degrades_to_default() {
        let doc: LegalDocument = parse_or_default("broken", "{ not json");
        assert_eq!(doc, LegalDocument::default());
    }

    #[test]
    fn icon_names_use_kebab_case() {
        let icons: Vec<Icon> = serde_json::from_str(r#"["file-text", "x-circle", "map-pin"]"#).unwrap();
        assert_eq!(icons, vec![Icon::FileText, Icon::XCircle, Icon::MapPin]);
    }
}
