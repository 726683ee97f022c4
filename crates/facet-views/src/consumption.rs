//! Parts-consumption list view (after-sales service).

use chrono::NaiveDate;
use facet_engine::{EngineConfig, Reducer, StatBasis};
use facet_query::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "Service Operations")]
    ServiceOperations,
    #[serde(rename = "Field Service")]
    FieldService,
    #[serde(rename = "Installation")]
    Installation,
    #[serde(rename = "Maintenance")]
    Maintenance,
    #[serde(rename = "Quality Assurance")]
    QualityAssurance,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::ServiceOperations => "Service Operations",
            Department::FieldService => "Field Service",
            Department::Installation => "Installation",
            Department::Maintenance => "Maintenance",
            Department::QualityAssurance => "Quality Assurance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Repair,
    Maintenance,
    Installation,
    Replacement,
    Upgrade,
    Inspection,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Repair => "repair",
            JobType::Maintenance => "maintenance",
            JobType::Installation => "installation",
            JobType::Replacement => "replacement",
            JobType::Upgrade => "upgrade",
            JobType::Inspection => "inspection",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionType {
    Planned,
    Unplanned,
    Emergency,
    Warranty,
    Preventive,
}

impl ConsumptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumptionType::Planned => "planned",
            ConsumptionType::Unplanned => "unplanned",
            ConsumptionType::Emergency => "emergency",
            ConsumptionType::Warranty => "warranty",
            ConsumptionType::Preventive => "preventive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    AutoApproved,
    Pending,
    Approved,
    Rejected,
    RequiresReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Completed,
    Partial,
    Pending,
    Cancelled,
}

/// One part consumed on a job. Part numbers and names participate in the
/// page's search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionItem {
    pub part_number: String,
    pub part_name: String,
    pub category: String,
    pub manufacturer: String,
    pub quantity_consumed: u32,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub warranty: bool,
}

/// One consumption record: parts a technician used on a service job.
///
/// Field names mirror the upstream payload (camelCase on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartsConsumption {
    pub id: String,
    pub consumption_id: String,
    pub consumption_date: NaiveDate,
    pub consumed_by: String,
    pub technician_id: String,
    pub department: Department,
    pub job_type: JobType,
    pub customer_name: Option<String>,
    pub location: String,
    pub total_items: u32,
    pub total_value: f64,
    pub consumption_type: ConsumptionType,
    pub approval_status: ApprovalStatus,
    pub items: Vec<ConsumptionItem>,
    pub labor_hours: f64,
    pub completion_status: CompletionStatus,
    pub customer_satisfaction: Option<f64>,
    pub cost_center: String,
    pub billable: bool,
}

/// The consumption page's engine wiring.
///
/// Stats run over the full working set — the page's tiles (including
/// "Avg Satisfaction") ignore active filters.
pub fn engine_config() -> EngineConfig<PartsConsumption> {
    EngineConfig::<PartsConsumption>::new()
        .search_field("consumption_id", |r, out| out.push(r.consumption_id.clone()))
        .search_field("consumed_by", |r, out| out.push(r.consumed_by.clone()))
        .search_field("technician_id", |r, out| out.push(r.technician_id.clone()))
        .search_field("customer_name", |r, out| {
            out.extend(r.customer_name.clone())
        })
        .search_field("items", |r, out| {
            for item in &r.items {
                out.push(item.part_number.clone());
                out.push(item.part_name.clone());
            }
        })
        .facet("department", |r| Some(r.department.as_str()))
        .facet("job_type", |r| Some(r.job_type.as_str()))
        .facet("consumption_type", |r| Some(r.consumption_type.as_str()))
        .date_field(|r| Some(r.consumption_date))
        .sort_field("consumption_date", |r| Value::from(r.consumption_date))
        .sort_field("total_value", |r| Value::from(r.total_value))
        .sort_field("total_items", |r| Value::Int(r.total_items as i64))
        .sort_field("department", |r| Value::from(r.department.as_str()))
        .stat(
            "total_value",
            StatBasis::Working,
            Reducer::Sum(|r| r.total_value),
        )
        .stat(
            "total_items",
            StatBasis::Working,
            Reducer::Sum(|r| r.total_items as f64),
        )
        .stat(
            "emergency",
            StatBasis::Working,
            Reducer::CountWhere(|r| r.consumption_type == ConsumptionType::Emergency),
        )
        .stat(
            "warranty",
            StatBasis::Working,
            Reducer::CountWhere(|r| r.consumption_type == ConsumptionType::Warranty),
        )
        .stat(
            "billable",
            StatBasis::Working,
            Reducer::CountWhere(|r| r.billable),
        )
        .stat(
            "avg_satisfaction",
            StatBasis::Working,
            Reducer::Average(|r| r.customer_satisfaction),
        )
}

/// The records the page ships with in place of a remote data source.
pub fn sample_records() -> Vec<PartsConsumption> {
    vec![
        PartsConsumption {
            id: "1".into(),
            consumption_id: "PC-2025-001".into(),
            consumption_date: fixture_date(2025, 10, 23),
            consumed_by: "Suresh Patel".into(),
            technician_id: "TECH001".into(),
            department: Department::ServiceOperations,
            job_type: JobType::Repair,
            customer_name: Some("Sharma Modular Kitchens Pvt Ltd".into()),
            location: "Mumbai, Maharashtra".into(),
            total_items: 4,
            total_value: 2400.0,
            consumption_type: ConsumptionType::Unplanned,
            approval_status: ApprovalStatus::AutoApproved,
            items: vec![
                item("KIT-HNG-001", "Cabinet Hinge - Soft Close", "Hardware", "Hettich", 4, 450.0, true),
                item("MCH-SCR-008", "Mounting Screws Set", "Hardware", "Hafele", 2, 125.0, false),
                item("CON-ADH-015", "Industrial Adhesive", "Consumable", "Fevicol", 1, 350.0, false),
            ],
            labor_hours: 3.5,
            completion_status: CompletionStatus::Completed,
            customer_satisfaction: Some(4.8),
            cost_center: "SERVICE-001".into(),
            billable: false,
        },
        PartsConsumption {
            id: "2".into(),
            consumption_id: "PC-2025-002".into(),
            consumption_date: fixture_date(2025, 10, 22),
            consumed_by: "Amit Singh".into(),
            technician_id: "TECH002".into(),
            department: Department::FieldService,
            job_type: JobType::Replacement,
            customer_name: Some("Elite Kitchen Solutions".into()),
            location: "Delhi, NCR".into(),
            total_items: 2,
            total_value: 1750.0,
            consumption_type: ConsumptionType::Emergency,
            approval_status: ApprovalStatus::Approved,
            items: vec![
                item("ELC-LED-012", "LED Strip Light - Under Cabinet", "Electronics", "Philips", 1, 1250.0, true),
                item("ELC-PWR-025", "Power Adapter 24V", "Electronics", "Mean Well", 1, 500.0, true),
            ],
            labor_hours: 2.0,
            completion_status: CompletionStatus::Completed,
            customer_satisfaction: Some(4.5),
            cost_center: "SERVICE-002".into(),
            billable: false,
        },
        PartsConsumption {
            id: "3".into(),
            consumption_id: "PC-2025-003".into(),
            consumption_date: fixture_date(2025, 10, 21),
            consumed_by: "Ravi Kumar".into(),
            technician_id: "TECH003".into(),
            department: Department::Installation,
            job_type: JobType::Installation,
            customer_name: Some("Modern Home Interiors".into()),
            location: "Bangalore, Karnataka".into(),
            total_items: 12,
            total_value: 8950.0,
            consumption_type: ConsumptionType::Planned,
            approval_status: ApprovalStatus::AutoApproved,
            items: vec![
                item("MCH-DRW-025", "Drawer Slide - Heavy Duty", "Mechanical", "Blum", 8, 890.0, false),
                item("MCH-SCR-015", "Heavy Duty Mounting Screws", "Hardware", "Hafele", 64, 25.0, false),
                item("CON-LUB-012", "Hinge Lubricant", "Consumable", "3M", 2, 115.0, false),
            ],
            labor_hours: 6.0,
            completion_status: CompletionStatus::Completed,
            customer_satisfaction: Some(4.9),
            cost_center: "INSTALL-001".into(),
            billable: true,
        },
        PartsConsumption {
            id: "4".into(),
            consumption_id: "PC-2025-004".into(),
            consumption_date: fixture_date(2025, 10, 20),
            consumed_by: "Deepak Sharma".into(),
            technician_id: "TECH004".into(),
            department: Department::Maintenance,
            job_type: JobType::Maintenance,
            customer_name: Some("Luxury Kitchen Designs".into()),
            location: "Chennai, Tamil Nadu".into(),
            total_items: 6,
            total_value: 1450.0,
            consumption_type: ConsumptionType::Preventive,
            approval_status: ApprovalStatus::AutoApproved,
            items: vec![
                item("CON-CLN-008", "Kitchen Cleaner - Stainless Steel", "Consumable", "Weiman", 4, 125.0, false),
                item("CON-POL-005", "Wood Polish - Premium", "Consumable", "Godrej", 2, 145.0, false),
            ],
            labor_hours: 4.5,
            completion_status: CompletionStatus::Completed,
            customer_satisfaction: Some(4.7),
            cost_center: "MAINTENANCE-001".into(),
            billable: false,
        },
        PartsConsumption {
            id: "5".into(),
            consumption_id: "PC-2025-005".into(),
            consumption_date: fixture_date(2025, 10, 19),
            consumed_by: "Manoj Kumar".into(),
            technician_id: "TECH005".into(),
            department: Department::QualityAssurance,
            job_type: JobType::Inspection,
            customer_name: Some("Premium Kitchen Works".into()),
            location: "Pune, Maharashtra".into(),
            total_items: 2,
            total_value: 450.0,
            consumption_type: ConsumptionType::Unplanned,
            approval_status: ApprovalStatus::Pending,
            items: vec![
                item("TLS-MSR-008", "Digital Calipers", "Tools", "Mitutoyo", 1, 350.0, false),
                item("CON-MRK-003", "Marking Tape", "Consumable", "3M", 2, 50.0, false),
            ],
            labor_hours: 1.5,
            completion_status: CompletionStatus::Partial,
            customer_satisfaction: None,
            cost_center: "QA-001".into(),
            billable: false,
        },
    ]
}

fn item(
    part_number: &str,
    part_name: &str,
    category: &str,
    manufacturer: &str,
    quantity: u32,
    unit_cost: f64,
    warranty: bool,
) -> ConsumptionItem {
    ConsumptionItem {
        part_number: part_number.into(),
        part_name: part_name.into(),
        category: category.into(),
        manufacturer: manufacturer.into(),
        quantity_consumed: quantity,
        unit_cost,
        total_cost: unit_cost * quantity as f64,
        warranty,
    }
}

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_valid() {
        assert!(engine_config().validate().is_ok());
    }

    #[test]
    fn records_serialize_camel_case() {
        let json = serde_json::to_value(&sample_records()[0]).unwrap();
        assert_eq!(json["consumptionId"], "PC-2025-001");
        assert_eq!(json["consumptionDate"], "2025-10-23");
        assert_eq!(json["department"], "Service Operations");
        assert_eq!(json["consumptionType"], "unplanned");
    }
}
