//! Static marketing cards: features and pricing tiers.

use egui::{Id, RichText, Ui};

use crate::utils::interaction::reveal;

pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub perks: &'static [&'static str],
}

pub const FEATURES: &[Card] = &[
    Card {
        title: "Five content types",
        body: "URLs, plain text, email drafts, phone numbers and Wi-Fi credentials.",
    },
    Card {
        title: "Custom styling",
        body: "Pick colors, module shapes and the error correction level.",
    },
    Card {
        title: "PNG, JPEG or SVG",
        body: "Download raster images for the web or vectors for print.",
    },
    Card {
        title: "Simple REST API",
        body: "One POST per code, JSON in and a data URI out.",
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        price: "$0",
        perks: &["100 codes / month", "PNG output"],
    },
    PricingTier {
        name: "Pro",
        price: "$9 / month",
        perks: &["10,000 codes / month", "All formats", "Custom styling"],
    },
    PricingTier {
        name: "Business",
        price: "$49 / month",
        perks: &["Unlimited codes", "Priority support"],
    },
];

const CARD_WIDTH: f32 = 220.0;

fn card_frame(ui: &Ui) -> egui::Frame {
    egui::Frame::group(ui.style())
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(14))
}

pub fn feature_cards(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        for (index, card) in FEATURES.iter().enumerate() {
            reveal(ui, Id::new(("feature_card", index)), |ui| {
                card_frame(ui).show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.label(RichText::new(card.title).strong().size(16.0));
                    ui.label(card.body);
                });
            });
        }
    });
}

pub fn pricing_cards(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        for (index, tier) in PRICING.iter().enumerate() {
            reveal(ui, Id::new(("pricing_card", index)), |ui| {
                card_frame(ui).show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.label(RichText::new(tier.name).strong().size(16.0));
                    ui.heading(tier.price);
                    for perk in tier.perks {
                        ui.label(format!("• {perk}"));
                    }
                });
            });
        }
    });
}
