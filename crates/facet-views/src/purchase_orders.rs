//! Purchase-order list view (procurement).

use chrono::NaiveDate;
use facet_engine::{EngineConfig, Reducer, StatBasis};
use facet_query::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Accessories")]
    Accessories,
    #[serde(rename = "Fittings")]
    Fittings,
    #[serde(rename = "Raw Materials")]
    RawMaterials,
    #[serde(rename = "Equipment")]
    Equipment,
    #[serde(rename = "Consumables")]
    Consumables,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Accessories => "Accessories",
            Category::Fittings => "Fittings",
            Category::RawMaterials => "Raw Materials",
            Category::Equipment => "Equipment",
            Category::Consumables => "Consumables",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    PendingApproval,
    Approved,
    Sent,
    Acknowledged,
    PartiallyDelivered,
    Delivered,
    Closed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::PendingApproval => "pending_approval",
            OrderStatus::Approved => "approved",
            OrderStatus::Sent => "sent",
            OrderStatus::Acknowledged => "acknowledged",
            OrderStatus::PartiallyDelivered => "partially_delivered",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Closed => "closed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Approved and in flight with the vendor.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Approved | OrderStatus::Sent | OrderStatus::Acknowledged
        )
    }

    pub fn is_delivered(&self) -> bool {
        matches!(
            self,
            OrderStatus::PartiallyDelivered | OrderStatus::Delivered
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub po_number: String,
    pub requisition_number: Option<String>,
    pub vendor_name: String,
    pub vendor_code: String,
    pub category: Category,
    pub status: OrderStatus,
    pub priority: Priority,
    pub total_amount: f64,
    pub currency: String,
    pub item_count: u32,
    pub created_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub created_by: String,
    pub approved_by: Option<String>,
}

/// The purchase-orders page's engine wiring. The vendor facet keys on the
/// vendor code, matching the page's vendor dropdown.
pub fn engine_config() -> EngineConfig<PurchaseOrder> {
    EngineConfig::<PurchaseOrder>::new()
        .search_field("po_number", |r, out| out.push(r.po_number.clone()))
        .search_field("vendor_name", |r, out| out.push(r.vendor_name.clone()))
        .search_field("requisition_number", |r, out| {
            out.extend(r.requisition_number.clone())
        })
        .search_field("created_by", |r, out| out.push(r.created_by.clone()))
        .facet("status", |r| Some(r.status.as_str()))
        .facet("priority", |r| Some(r.priority.as_str()))
        .facet("vendor", |r| Some(r.vendor_code.as_str()))
        .facet("category", |r| Some(r.category.as_str()))
        .date_field(|r| Some(r.created_date))
        .sort_field("date", |r| Value::from(r.created_date))
        .sort_field("amount", |r| Value::from(r.total_amount))
        .sort_field("vendor", |r| Value::from(r.vendor_name.as_str()))
        .sort_field("status", |r| Value::from(r.status.as_str()))
        .stat("total", StatBasis::Working, Reducer::Count)
        .stat(
            "draft",
            StatBasis::Working,
            Reducer::CountWhere(|r| r.status == OrderStatus::Draft),
        )
        .stat(
            "pending",
            StatBasis::Working,
            Reducer::CountWhere(|r| r.status == OrderStatus::PendingApproval),
        )
        .stat(
            "active",
            StatBasis::Working,
            Reducer::CountWhere(|r| r.status.is_active()),
        )
        .stat(
            "delivered",
            StatBasis::Working,
            Reducer::CountWhere(|r| r.status.is_delivered()),
        )
        .stat(
            "total_value",
            StatBasis::Working,
            Reducer::Sum(|r| r.total_amount),
        )
}

/// The records the page ships with in place of a remote data source.
pub fn sample_records() -> Vec<PurchaseOrder> {
    vec![
        order(
            "1",
            "PO-2024-001",
            Some("REQ-2024-045"),
            "Kitchen Accessories Supplier",
            "VEND-001",
            Category::Accessories,
            OrderStatus::Approved,
            Priority::High,
            125_000.0,
            15,
            (2024, 1, 15),
            (2024, 2, 15),
            "John Smith",
            Some("Sarah Johnson"),
        ),
        order(
            "2",
            "PO-2024-002",
            None,
            "Plumbing Fittings Inc",
            "VEND-002",
            Category::Fittings,
            OrderStatus::Sent,
            Priority::Medium,
            45_000.0,
            8,
            (2024, 1, 18),
            (2024, 2, 28),
            "Mike Davis",
            None,
        ),
        order(
            "3",
            "PO-2024-003",
            Some("REQ-2024-051"),
            "Hardwood Traders",
            "VEND-003",
            Category::RawMaterials,
            OrderStatus::Draft,
            Priority::Low,
            210_000.0,
            22,
            (2024, 1, 20),
            (2024, 3, 10),
            "John Smith",
            None,
        ),
        order(
            "4",
            "PO-2024-004",
            None,
            "Kitchen Accessories Supplier",
            "VEND-001",
            Category::Equipment,
            OrderStatus::PartiallyDelivered,
            Priority::Urgent,
            98_500.0,
            5,
            (2024, 1, 22),
            (2024, 2, 5),
            "Priya Nair",
            Some("Sarah Johnson"),
        ),
        order(
            "5",
            "PO-2024-005",
            Some("REQ-2024-060"),
            "Consumable Depot",
            "VEND-004",
            Category::Consumables,
            OrderStatus::PendingApproval,
            Priority::Medium,
            12_750.0,
            30,
            (2024, 1, 25),
            (2024, 2, 20),
            "Mike Davis",
            None,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    po_number: &str,
    requisition_number: Option<&str>,
    vendor_name: &str,
    vendor_code: &str,
    category: Category,
    status: OrderStatus,
    priority: Priority,
    total_amount: f64,
    item_count: u32,
    created: (i32, u32, u32),
    delivery: (i32, u32, u32),
    created_by: &str,
    approved_by: Option<&str>,
) -> PurchaseOrder {
    PurchaseOrder {
        id: id.into(),
        po_number: po_number.into(),
        requisition_number: requisition_number.map(str::to_string),
        vendor_name: vendor_name.into(),
        vendor_code: vendor_code.into(),
        category,
        status,
        priority,
        total_amount,
        currency: "USD".into(),
        item_count,
        created_date: fixture_date(created),
        delivery_date: fixture_date(delivery),
        created_by: created_by.into(),
        approved_by: approved_by.map(str::to_string),
    }
}

fn fixture_date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date")
}
