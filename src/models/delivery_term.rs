//! Incoterms 2020
//!
//! Lista estática de condiciones de entrega que usa el formulario de reserva.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryTerm {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const DELIVERY_TERMS: &[DeliveryTerm] = &[
    DeliveryTerm {
        code: "EXW",
        name: "Ex Works",
        description: "Seller makes the goods available at its premises; buyer bears all costs and risks from there.",
    },
    DeliveryTerm {
        code: "FCA",
        name: "Free Carrier",
        description: "Seller delivers export-cleared goods to the carrier nominated by the buyer at the named place.",
    },
    DeliveryTerm {
        code: "FAS",
        name: "Free Alongside Ship",
        description: "Seller delivers when the goods are placed alongside the vessel at the named port of shipment.",
    },
    DeliveryTerm {
        code: "FOB",
        name: "Free On Board",
        description: "Seller delivers the goods on board the vessel nominated by the buyer at the named port of shipment.",
    },
    DeliveryTerm {
        code: "CFR",
        name: "Cost and Freight",
        description: "Seller pays freight to the named port of destination; risk passes once the goods are on board.",
    },
    DeliveryTerm {
        code: "CIF",
        name: "Cost, Insurance and Freight",
        description: "As CFR, plus the seller contracts minimum insurance cover for the buyer's risk during carriage.",
    },
    DeliveryTerm {
        code: "CPT",
        name: "Carriage Paid To",
        description: "Seller pays carriage to the named destination; risk passes on handover to the first carrier.",
    },
    DeliveryTerm {
        code: "CIP",
        name: "Carriage and Insurance Paid To",
        description: "As CPT, plus the seller contracts all-risks insurance cover for the carriage.",
    },
    DeliveryTerm {
        code: "DAP",
        name: "Delivered at Place",
        description: "Seller delivers when the goods are ready for unloading at the named destination.",
    },
    DeliveryTerm {
        code: "DPU",
        name: "Delivered at Place Unloaded",
        description: "Seller delivers once the goods are unloaded at the named place of destination.",
    },
    DeliveryTerm {
        code: "DDP",
        name: "Delivered Duty Paid",
        description: "Seller delivers import-cleared goods at the named destination, paying all duties and taxes.",
    },
];

pub fn is_known_incoterm(code: &str) -> bool {
    DELIVERY_TERMS.iter().any(|term| term.code == code)
}
