//! Container detail builder.
//!
//! Container data is inherently structural: one card per container with
//! nested disk/GPU device sub-lists, so it bypasses the generic pretty-dump
//! renderer. The agent may substitute a pre-formatted human string for
//! either device category; the builder branches on that union rather than
//! assuming one shape.

use serde_json::Value;

use crate::api::types::{ContainerRecord, DeviceList, DiskDevice, ErrorEnvelope, GpuDevice};
use crate::domain::feed::FeedValue;

pub const NO_CONTAINERS: &str = "No LXC containers found.";
pub const NO_DISK_DEVICES: &str = "No disk devices found or usage not reported.";
pub const NO_GPU_DEVICES: &str = "No GPU devices configured for this container.";
const UNEXPECTED_SHAPE: &str = "Container data not available or in unexpected format.";

/// One rendered fragment of the container view.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerFragment {
    /// Informational or error note occupying the surface on its own
    /// (platform message, fetch failure, no containers, bad record).
    Note(String),
    /// One container.
    Card(ContainerCard),
}

/// Display card for a single container; every field is final display text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerCard {
    pub title: String,
    pub owner: String,
    pub ipv4: String,
    pub ipv6: String,
    pub memory_mb: String,
    pub disks: DeviceSection,
    pub gpus: DeviceSection,
}

/// Sub-section for one device category: bullet items, or a single verbatim
/// or informational line.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceSection {
    Items(Vec<String>),
    Note(String),
}

/// Build the container view fragments from a classified `/api/lxc`
/// snapshot.
pub fn build_fragments(feed: &FeedValue) -> Vec<ContainerFragment> {
    match feed {
        FeedValue::Error(envelope) => {
            let mut text = format!("Error fetching LXC data: {}", envelope.error);
            if let Some(message) = &envelope.message {
                text.push('\n');
                text.push_str(message);
            }
            vec![ContainerFragment::Note(text)]
        }
        FeedValue::NotApplicable { message } => vec![ContainerFragment::Note(message.clone())],
        FeedValue::Empty => vec![ContainerFragment::Note(NO_CONTAINERS.to_string())],
        FeedValue::Structured(Value::Array(items)) => items.iter().map(record_fragment).collect(),
        FeedValue::Structured(value) => {
            // The agent can reply with a bare informational message object.
            match value.get("message").and_then(Value::as_str) {
                Some(message) => vec![ContainerFragment::Note(message.to_string())],
                None => vec![ContainerFragment::Note(UNEXPECTED_SHAPE.to_string())],
            }
        }
        FeedValue::Missing => vec![ContainerFragment::Note(UNEXPECTED_SHAPE.to_string())],
    }
}

/// Build one fragment from one array element. Per-record failures arrive
/// inline as error objects inside an otherwise healthy array.
fn record_fragment(value: &Value) -> ContainerFragment {
    if let Some(envelope) = ErrorEnvelope::from_value(value) {
        return ContainerFragment::Note(format!("Error: {}", envelope.error));
    }

    let record: ContainerRecord = match serde_json::from_value(value.clone()) {
        Ok(record) => record,
        Err(e) => return ContainerFragment::Note(format!("Unreadable container record: {}", e)),
    };

    ContainerFragment::Card(ContainerCard {
        title: record.title(),
        owner: record.owner_display().to_string(),
        ipv4: record.ipv4_display(),
        ipv6: record.ipv6_display(),
        memory_mb: record.memory_display(),
        disks: disk_section(&record.disk_devices),
        gpus: gpu_section(&record.gpu_devices),
    })
}

fn disk_section(devices: &DeviceList<DiskDevice>) -> DeviceSection {
    match devices {
        DeviceList::Verbatim(text) => DeviceSection::Note(text.clone()),
        DeviceList::Listed(items) if items.is_empty() => {
            DeviceSection::Note(NO_DISK_DEVICES.to_string())
        }
        DeviceList::Listed(items) => DeviceSection::Items(items.iter().map(disk_line).collect()),
    }
}

fn disk_line(device: &DiskDevice) -> String {
    let mut line = format!(
        "{} (Path: {}, Pool: {})",
        device.name.as_deref().unwrap_or("N/A"),
        device.path.as_deref().unwrap_or("N/A"),
        device.pool.as_deref().unwrap_or("N/A"),
    );
    match device.usage() {
        Some((used, total)) => {
            line.push_str(&format!(" - Usage: {} / {}", used, total));
        }
        None => line.push_str(" (Usage N/A)"),
    }
    line
}

fn gpu_section(devices: &DeviceList<GpuDevice>) -> DeviceSection {
    match devices {
        DeviceList::Verbatim(text) => DeviceSection::Note(text.clone()),
        DeviceList::Listed(items) if items.is_empty() => {
            DeviceSection::Note(NO_GPU_DEVICES.to_string())
        }
        DeviceList::Listed(items) => DeviceSection::Items(items.iter().map(gpu_line).collect()),
    }
}

/// Compose the GPU line from whichever identifying fields are present.
fn gpu_line(device: &GpuDevice) -> String {
    let name = device.name.as_deref().unwrap_or("N/A");
    let mut attrs = Vec::new();
    if let Some(vendor) = &device.vendor {
        attrs.push(format!("Vendor: {}", vendor));
    }
    if let Some(product) = &device.product {
        attrs.push(format!("Product: {}", product));
    }
    if let Some(pci) = &device.pci_address {
        attrs.push(format!("PCI: {}", pci));
    }
    if attrs.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, attrs.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fragments_for(value: Value) -> Vec<ContainerFragment> {
        build_fragments(&FeedValue::classify(value))
    }

    #[test]
    fn empty_list_yields_single_no_containers_note() {
        let fragments = fragments_for(json!([]));
        assert_eq!(
            fragments,
            vec![ContainerFragment::Note(NO_CONTAINERS.to_string())]
        );
    }

    #[test]
    fn error_shape_yields_error_note_with_optional_message() {
        let fragments = fragments_for(json!({
            "error": "Failed to list LXC containers",
            "message": "lxc daemon unreachable"
        }));
        assert_eq!(
            fragments,
            vec![ContainerFragment::Note(
                "Error fetching LXC data: Failed to list LXC containers\nlxc daemon unreachable"
                    .to_string()
            )]
        );
    }

    #[test]
    fn platform_message_yields_informational_note() {
        let fragments = fragments_for(json!({
            "status": "not_applicable",
            "message": "LXC container monitoring is specific to Linux. Current OS: Darwin",
            "data": []
        }));
        assert_eq!(
            fragments,
            vec![ContainerFragment::Note(
                "LXC container monitoring is specific to Linux. Current OS: Darwin".to_string()
            )]
        );

        // A bare message object without the status marker gets the same
        // treatment.
        let fragments = fragments_for(json!({ "message": "LXC commands not available" }));
        assert_eq!(
            fragments,
            vec![ContainerFragment::Note("LXC commands not available".to_string())]
        );
    }

    #[test]
    fn string_device_fields_render_verbatim() {
        let fragments = fragments_for(json!([{
            "name": "db01",
            "status": "Stopped",
            "disk_devices": "No disk devices",
            "gpu_devices": "No GPU devices configured."
        }]));
        let ContainerFragment::Card(card) = &fragments[0] else {
            panic!("expected a card");
        };
        assert_eq!(card.disks, DeviceSection::Note("No disk devices".to_string()));
        assert_eq!(
            card.gpus,
            DeviceSection::Note("No GPU devices configured.".to_string())
        );
    }

    #[test]
    fn empty_device_lists_render_fixed_messages() {
        let fragments = fragments_for(json!([{
            "name": "db01",
            "status": "Running",
            "disk_devices": [],
            "gpu_devices": []
        }]));
        let ContainerFragment::Card(card) = &fragments[0] else {
            panic!("expected a card");
        };
        assert_eq!(card.disks, DeviceSection::Note(NO_DISK_DEVICES.to_string()));
        assert_eq!(card.gpus, DeviceSection::Note(NO_GPU_DEVICES.to_string()));
    }

    #[test]
    fn populated_disk_device_renders_usage_when_both_ends_present() {
        let fragments = fragments_for(json!([{
            "name": "web01",
            "status": "Running",
            "user_owner": "ops",
            "ipv4": ["10.0.0.5"],
            "memory_usage_mb": 512.5,
            "disk_devices": [
                { "name": "root", "path": "/", "pool": "default",
                  "used": "7.2GiB", "total": "20GiB" },
                { "name": "scratch", "path": "/scratch", "pool": "fast" }
            ],
            "gpu_devices": []
        }]));

        let ContainerFragment::Card(card) = &fragments[0] else {
            panic!("expected a card");
        };
        assert_eq!(card.title, "web01 (Status: Running)");
        assert_eq!(card.owner, "ops");
        assert_eq!(card.ipv4, "10.0.0.5");
        assert_eq!(card.ipv6, "N/A");
        assert_eq!(card.memory_mb, "512.5");
        assert_eq!(
            card.disks,
            DeviceSection::Items(vec![
                "root (Path: /, Pool: default) - Usage: 7.2GiB / 20GiB".to_string(),
                "scratch (Path: /scratch, Pool: fast) (Usage N/A)".to_string(),
            ])
        );
    }

    #[test]
    fn gpu_lines_parenthesize_only_present_fields() {
        let fragments = fragments_for(json!([{
            "name": "ml01",
            "status": "Running",
            "disk_devices": [],
            "gpu_devices": [
                { "name": "gpu0", "vendor": "NVIDIA", "product": "GA102", "pci_address": "0000:0a:00.0" },
                { "name": "gpu1", "pci": "0000:0b:00.0" },
                { "name": "gpu2" }
            ]
        }]));
        let ContainerFragment::Card(card) = &fragments[0] else {
            panic!("expected a card");
        };
        assert_eq!(
            card.gpus,
            DeviceSection::Items(vec![
                "gpu0 (Vendor: NVIDIA, Product: GA102, PCI: 0000:0a:00.0)".to_string(),
                "gpu1 (PCI: 0000:0b:00.0)".to_string(),
                "gpu2".to_string(),
            ])
        );
    }

    #[test]
    fn inline_error_record_becomes_note_between_cards() {
        let fragments = fragments_for(json!([
            { "name": "ok", "status": "Running" },
            { "error": "Failed to get info for broken01" }
        ]));
        assert_eq!(fragments.len(), 2);
        assert!(matches!(fragments[0], ContainerFragment::Card(_)));
        assert_eq!(
            fragments[1],
            ContainerFragment::Note("Error: Failed to get info for broken01".to_string())
        );
    }
}
