//! Seed data for the in-memory stores
//!
//! The console operates entirely against static mock data: a small material
//! catalog and a handful of submitted quotes in various approval states.

use chrono::NaiveDate;

use crate::models::{
    ClientInfo, LineItem, Material, MaterialId, Money, Quote, QuoteNumber, QuoteStatus,
    TechnicianInfo,
};

use super::catalog::MaterialCatalog;
use super::quotes::InMemoryQuoteStore;

/// Build the seeded material catalog
pub fn material_catalog() -> MaterialCatalog {
    MaterialCatalog::new(vec![
        Material {
            id: MaterialId::new(1),
            code: "MAT-001".into(),
            description: "Cat6 Network Cable - 305m".into(),
            unit: "Roll".into(),
            cost: Money::from_cents(45000),
            price: Money::from_cents(63000),
            stock: 15,
            min_stock: 5,
            ncm: "85444290".into(),
            active: true,
        },
        Material {
            id: MaterialId::new(2),
            code: "MAT-002".into(),
            description: "RJ45 Cat6 Connectors".into(),
            unit: "Unit".into(),
            cost: Money::from_cents(250),
            price: Money::from_cents(420),
            stock: 8,
            min_stock: 20,
            ncm: "85366990".into(),
            active: true,
        },
        Material {
            id: MaterialId::new(3),
            code: "MAT-003".into(),
            description: "24-port Gigabit Switch".into(),
            unit: "Unit".into(),
            cost: Money::from_cents(89000),
            price: Money::from_cents(125000),
            stock: 3,
            min_stock: 5,
            ncm: "85176990".into(),
            active: true,
        },
        Material {
            id: MaterialId::new(4),
            code: "MAT-004".into(),
            description: "24-port Patch Panel".into(),
            unit: "Unit".into(),
            cost: Money::from_cents(12500),
            price: Money::from_cents(18500),
            stock: 12,
            min_stock: 8,
            ncm: "85389099".into(),
            active: true,
        },
    ])
}

fn item(
    material_id: Option<MaterialId>,
    description: &str,
    quantity: f64,
    unit: &str,
    unit_price: Money,
) -> LineItem {
    let mut item = LineItem::new();
    item.material_id = material_id;
    item.set_description(description);
    item.set_unit(unit);
    item.set_unit_price(unit_price);
    item.set_quantity(quantity);
    item
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Build the seeded quote store (newest first)
pub fn quote_store() -> InMemoryQuoteStore {
    let qte_001 = {
        let items = vec![
            item(
                Some(MaterialId::new(1)),
                "Cat6 Network Cable - 305m",
                2.0,
                "Roll",
                Money::from_cents(63000),
            ),
            item(
                Some(MaterialId::new(2)),
                "RJ45 Cat6 Connectors",
                100.0,
                "Unit",
                Money::from_cents(420),
            ),
            item(
                Some(MaterialId::new(4)),
                "24-port Patch Panel",
                3.0,
                "Unit",
                Money::from_cents(18500),
            ),
            item(
                Some(MaterialId::new(3)),
                "24-port Gigabit Switch",
                3.0,
                "Unit",
                Money::from_cents(125000),
            ),
        ];
        let materials_cost: Money = items.iter().map(|i| i.total()).sum();
        let labor_cost = Money::from_cents(625000);
        Quote {
            number: QuoteNumber::new(1),
            client: ClientInfo {
                name: "ABC Enterprises Ltd".into(),
                tax_id: "12.345.678/0001-90".into(),
            },
            technician: Some(TechnicianInfo {
                name: "Joao Silva".into(),
                company: "TechServ".into(),
            }),
            description: "Structured network installation for 50 points".into(),
            materials_cost,
            labor_cost,
            discount: Money::zero(),
            total_value: materials_cost + labor_cost,
            items,
            status: QuoteStatus::Pending,
            rejection_reason: None,
            created_at: date(2024, 1, 15),
            validity: Some(date(2024, 2, 15)),
            execution_time: "15 business days".into(),
            payment_terms: "50% upfront, 50% on completion".into(),
        }
    };

    let qte_002 = {
        let items = vec![item(
            None,
            "Assorted replacement materials",
            1.0,
            "Lot",
            Money::from_cents(320000),
        )];
        let materials_cost: Money = items.iter().map(|i| i.total()).sum();
        let labor_cost = Money::from_cents(575000);
        Quote {
            number: QuoteNumber::new(2),
            client: ClientInfo {
                name: "XYZ Commerce".into(),
                tax_id: "98.765.432/0001-10".into(),
            },
            technician: Some(TechnicianInfo {
                name: "Maria Santos".into(),
                company: "NetWork Pro".into(),
            }),
            description: "Preventive maintenance on network equipment".into(),
            materials_cost,
            labor_cost,
            discount: Money::zero(),
            total_value: materials_cost + labor_cost,
            items,
            status: QuoteStatus::Approved,
            rejection_reason: None,
            created_at: date(2024, 1, 14),
            validity: Some(date(2024, 2, 20)),
            execution_time: "5 business days".into(),
            payment_terms: "Net 30".into(),
        }
    };

    let qte_003 = {
        let items = vec![
            item(
                Some(MaterialId::new(3)),
                "24-port Gigabit Switch",
                20.0,
                "Unit",
                Money::from_cents(125000),
            ),
            item(
                Some(MaterialId::new(4)),
                "24-port Patch Panel",
                12.0,
                "Unit",
                Money::from_cents(18500),
            ),
        ];
        let materials_cost: Money = items.iter().map(|i| i.total()).sum();
        let labor_cost = Money::from_cents(500000);
        let discount = Money::from_cents(12000);
        Quote {
            number: QuoteNumber::new(3),
            client: ClientInfo {
                name: "DEF Industries".into(),
                tax_id: "11.222.333/0001-44".into(),
            },
            technician: Some(TechnicianInfo {
                name: "Pedro Costa".into(),
                company: "TechServ".into(),
            }),
            description: "Data center switch upgrade".into(),
            materials_cost,
            labor_cost,
            discount,
            total_value: materials_cost + labor_cost - discount,
            items,
            status: QuoteStatus::Rejected,
            rejection_reason: Some("Cost above the approved budget for the quarter".into()),
            created_at: date(2024, 1, 13),
            validity: Some(date(2024, 2, 10)),
            execution_time: "10 business days".into(),
            payment_terms: "Net 45".into(),
        }
    };

    // Newest first
    InMemoryQuoteStore::with_quotes(vec![qte_003, qte_002, qte_001])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::quotes::QuoteRepository;

    #[test]
    fn test_catalog_has_four_materials() {
        assert_eq!(material_catalog().len(), 4);
    }

    #[test]
    fn test_seeded_totals_are_consistent() {
        let store = quote_store();
        for quote in store.list() {
            let materials: Money = quote.items.iter().map(|i| i.total()).sum();
            assert_eq!(quote.materials_cost, materials, "{}", quote.number);
            assert_eq!(
                quote.total_value,
                materials + quote.labor_cost - quote.discount,
                "{}",
                quote.number
            );
        }
    }

    #[test]
    fn test_seeded_store_is_newest_first() {
        let store = quote_store();
        let numbers: Vec<u32> = store.list().iter().map(|q| q.number.ordinal()).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(store.next_number(), QuoteNumber::new(4));
    }

    #[test]
    fn test_one_pending_quote_seeded() {
        let store = quote_store();
        assert_eq!(store.list().iter().filter(|q| q.is_pending()).count(), 1);
    }
}
