/// A group of services shown together on the service-selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCategory {
    pub name: &'static str,
    pub services: &'static [&'static str],
}

pub const SERVICE_CATALOG: &[ServiceCategory] = &[
    ServiceCategory {
        name: "Offset Printing",
        services: &["Visiting Cards", "Letterheads", "Bill Books", "Brochures"],
    },
    ServiceCategory {
        name: "Digital Printing",
        services: &["Photo Prints", "Colour Copies", "ID Cards"],
    },
    ServiceCategory {
        name: "Flex & Banners",
        services: &["Flex Banners", "Vinyl Printing", "Standees"],
    },
    ServiceCategory {
        name: "Screen Printing",
        services: &["T-Shirts", "Carry Bags", "Stickers & Labels"],
    },
    ServiceCategory {
        name: "Binding & Finishing",
        services: &["Lamination", "Spiral Binding", "Die Cutting"],
    },
    ServiceCategory {
        name: "Stationery",
        services: &["Wedding Cards", "Envelopes", "Pamphlets"],
    },
];

pub fn category_of(service: &str) -> Option<&'static ServiceCategory> {
    SERVICE_CATALOG
        .iter()
        .find(|category| category.services.contains(&service))
}

pub fn is_known_service(service: &str) -> bool {
    category_of(service).is_some()
}
