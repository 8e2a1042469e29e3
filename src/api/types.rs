//! Wire types for the host-agent API.
//!
//! The agent's feeds are independently shaped and use inconsistent field
//! naming depending on which OS code path produced them (`wmic` vs
//! `/proc`, `systeminfo` vs `free`). Each record here maps all known
//! variants onto one canonical shape so display logic never re-derives
//! fallback chains inline.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scalar that may arrive as a number or a string depending on the agent's
/// OS path (`wmic` emits integers, `/proc/cpuinfo` parsing emits strings).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Uint(u64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// True for the agent's literal placeholder values.
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Scalar::Text(s) if s.is_empty() || s == "N/A")
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Uint(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Display an optional scalar, substituting "N/A" when absent or when the
/// agent sent a literal placeholder.
fn or_na(value: Option<&Scalar>) -> String {
    match value {
        Some(v) if !v.is_placeholder() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

/// Comma-join an address list, or "N/A" when empty.
fn join_or_na(addrs: &[String]) -> String {
    if addrs.is_empty() {
        "N/A".to_string()
    } else {
        addrs.join(", ")
    }
}

/// Normalized error shape, produced by the transport layer on failure or by
/// the agent itself on application-level failure. Distinguishable from
/// legitimate data only by the presence of the `error` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            message: None,
        }
    }

    /// Extract the envelope if `value` carries a non-null `error` field.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value.get("error") {
            Some(e) if !e.is_null() => Some(Self {
                error: field_text(e),
                details: value
                    .get("details")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                message: value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
            _ => None,
        }
    }

    /// Render as the JSON value shape that loaders classify.
    pub fn into_value(self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("error".to_string(), Value::String(self.error));
        if let Some(details) = self.details {
            map.insert("details".to_string(), Value::String(details));
        }
        if let Some(message) = self.message {
            map.insert("message".to_string(), Value::String(message));
        }
        Value::Object(map)
    }
}

/// Error fields are strings in practice, but nothing stops the agent from
/// sending something else; render it as-is rather than dropping it.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Canonical CPU record from `/api/cpu-info`. The Windows agent path emits
/// `Name`/`NumberOfCores`/`NumberOfLogicalProcessors`; the Linux path emits
/// `model_name`/`cpu_cores`/`siblings` with string values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CpuRecord {
    #[serde(default, alias = "Name", alias = "model_name")]
    pub name: Option<String>,
    #[serde(default, alias = "NumberOfCores", alias = "cpu_cores")]
    pub cores: Option<Scalar>,
    #[serde(default, alias = "NumberOfLogicalProcessors", alias = "siblings")]
    pub threads: Option<Scalar>,
}

impl CpuRecord {
    /// One-line overview summary.
    pub fn summary(&self) -> String {
        format!(
            "{} ({} Cores, {} Threads)",
            self.name.as_deref().unwrap_or("Unknown CPU"),
            or_na(self.cores.as_ref()),
            or_na(self.threads.as_ref())
        )
    }
}

/// Canonical GPU record from `/api/gpu-info`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GpuRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "memory_total_mb")]
    pub memory_total: Option<Scalar>,
    #[serde(default)]
    pub utilization_gpu: Option<Scalar>,
}

impl GpuRecord {
    /// One-line overview summary; GPU lines take the compute slot over the
    /// CPU summary when any GPU is present.
    pub fn summary_line(&self) -> String {
        format!(
            "{} (Memory: {} MiB, Util: {} %)",
            self.name.as_deref().unwrap_or("Unknown GPU"),
            or_na(self.memory_total.as_ref()),
            or_na(self.utilization_gpu.as_ref())
        )
    }
}

/// RAM sub-record of `/api/ram-disk`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RamInfo {
    #[serde(default)]
    pub total_mb: Option<Scalar>,
    #[serde(default)]
    pub used_mb: Option<Scalar>,
    #[serde(default)]
    pub available_mb: Option<Scalar>,
}

impl RamInfo {
    pub fn summary(&self) -> String {
        format!(
            "Total: {} MB, Used: {} MB, Available: {} MB",
            or_na(self.total_mb.as_ref()),
            or_na(self.used_mb.as_ref()),
            or_na(self.available_mb.as_ref())
        )
    }
}

/// Disk sub-record of `/api/ram-disk`. The Linux path (`df -hP`) emits both
/// `filesystem` and `mounted_on` plus `*_str` size fields; the Windows path
/// (`wmic logicaldisk`) emits numeric `*_gb` fields. Synonymous keys can
/// coexist in one record, so precedence lives in accessors rather than
/// serde aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiskRecord {
    #[serde(default)]
    pub filesystem: Option<String>,
    #[serde(default)]
    pub mounted_on: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub used_gb: Option<Scalar>,
    #[serde(default)]
    pub used_str: Option<String>,
    #[serde(default)]
    pub total_gb: Option<Scalar>,
    #[serde(default)]
    pub total_str: Option<String>,
    #[serde(default)]
    pub use_percent: Option<Scalar>,
    #[serde(default)]
    pub use_percent_str: Option<String>,
}

impl DiskRecord {
    /// Device name: filesystem, else mount point, else caption.
    pub fn display_name(&self) -> &str {
        self.filesystem
            .as_deref()
            .or(self.mounted_on.as_deref())
            .or(self.caption.as_deref())
            .unwrap_or("N/A")
    }

    fn used_display(&self) -> String {
        scalar_or_str(self.used_gb.as_ref(), self.used_str.as_deref())
    }

    fn total_display(&self) -> String {
        scalar_or_str(self.total_gb.as_ref(), self.total_str.as_deref())
    }

    fn percent_display(&self) -> String {
        scalar_or_str(self.use_percent.as_ref(), self.use_percent_str.as_deref())
    }

    /// One overview line per filesystem.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} GB used of {} GB ({})",
            self.display_name(),
            self.used_display(),
            self.total_display(),
            self.percent_display()
        )
    }
}

/// First real value out of a numeric field and its `*_str` sibling.
fn scalar_or_str(scalar: Option<&Scalar>, text: Option<&str>) -> String {
    match (scalar, text) {
        (Some(v), _) if !v.is_placeholder() => v.to_string(),
        (_, Some(s)) if !s.is_empty() => s.to_string(),
        _ => "N/A".to_string(),
    }
}

/// Either structured device records or a pre-formatted human string the
/// agent substitutes when it has nothing structured to report. Renderers
/// must branch on this union, not assume one shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DeviceList<T> {
    Listed(Vec<T>),
    Verbatim(String),
}

impl<T> Default for DeviceList<T> {
    fn default() -> Self {
        DeviceList::Listed(Vec::new())
    }
}

/// One LXC container as reported by `/api/lxc`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub user_owner: Option<String>,
    #[serde(default)]
    pub ipv4: Vec<String>,
    #[serde(default)]
    pub ipv6: Vec<String>,
    #[serde(default)]
    pub memory_usage_mb: Option<Scalar>,
    #[serde(default)]
    pub disk_devices: DeviceList<DiskDevice>,
    #[serde(default)]
    pub gpu_devices: DeviceList<GpuDevice>,
}

impl ContainerRecord {
    /// Card header line.
    pub fn title(&self) -> String {
        format!(
            "{} (Status: {})",
            self.name.as_deref().unwrap_or("unknown"),
            self.status.as_deref().unwrap_or("unknown")
        )
    }

    pub fn owner_display(&self) -> &str {
        match self.user_owner.as_deref() {
            Some(owner) if !owner.is_empty() => owner,
            _ => "N/A",
        }
    }

    pub fn ipv4_display(&self) -> String {
        join_or_na(&self.ipv4)
    }

    pub fn ipv6_display(&self) -> String {
        join_or_na(&self.ipv6)
    }

    pub fn memory_display(&self) -> String {
        or_na(self.memory_usage_mb.as_ref())
    }
}

/// Disk device attached to a container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DiskDevice {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub pool: Option<String>,
    #[serde(default)]
    pub total: Option<Scalar>,
    #[serde(default)]
    pub used: Option<Scalar>,
}

impl DiskDevice {
    /// Usage pair, only when the agent reported real values for both ends.
    /// The agent writes literal "N/A" strings when usage is unavailable;
    /// those normalize to absent.
    pub fn usage(&self) -> Option<(String, String)> {
        match (&self.used, &self.total) {
            (Some(used), Some(total)) if !used.is_placeholder() && !total.is_placeholder() => {
                Some((used.to_string(), total.to_string()))
            }
            _ => None,
        }
    }
}

/// GPU device passed through to a container. Every field is optional;
/// rendering degrades field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GpuDevice {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default, alias = "pci")]
    pub pci_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cpu_record_accepts_windows_field_names() {
        let cpu: CpuRecord = serde_json::from_value(json!({
            "Name": "Xeon E5",
            "NumberOfCores": 8,
            "NumberOfLogicalProcessors": 16,
            "SocketDesignation": "CPU0"
        }))
        .unwrap();
        assert_eq!(cpu.summary(), "Xeon E5 (8 Cores, 16 Threads)");
    }

    #[test]
    fn cpu_record_accepts_linux_field_names() {
        let cpu: CpuRecord = serde_json::from_value(json!({
            "model_name": "AMD EPYC 7543",
            "cpu_cores": "32",
            "siblings": "64",
            "cpu_MHz": "2800.000"
        }))
        .unwrap();
        assert_eq!(cpu.summary(), "AMD EPYC 7543 (32 Cores, 64 Threads)");
    }

    #[test]
    fn cpu_record_substitutes_missing_fields() {
        let cpu: CpuRecord = serde_json::from_value(json!({ "NumberOfCores": 4 })).unwrap();
        assert_eq!(cpu.summary(), "Unknown CPU (4 Cores, N/A Threads)");
    }

    #[test]
    fn gpu_record_accepts_both_memory_keys() {
        let a: GpuRecord =
            serde_json::from_value(json!({ "name": "RTX 3090", "memory_total": 24576 })).unwrap();
        let b: GpuRecord =
            serde_json::from_value(json!({ "name": "RTX 3090", "memory_total_mb": 24576 }))
                .unwrap();
        assert_eq!(a.summary_line(), b.summary_line());
        assert_eq!(
            a.summary_line(),
            "RTX 3090 (Memory: 24576 MiB, Util: N/A %)"
        );
    }

    #[test]
    fn scalar_displays_numbers_and_strings_alike() {
        assert_eq!(Scalar::Uint(8).to_string(), "8");
        assert_eq!(Scalar::Float(1843.2).to_string(), "1843.2");
        assert_eq!(Scalar::Text("50%".to_string()).to_string(), "50%");
        assert!(Scalar::Text("N/A".to_string()).is_placeholder());
        assert!(!Scalar::Uint(0).is_placeholder());
    }

    #[test]
    fn disk_record_prefers_filesystem_over_mount_point() {
        // The Linux agent emits both keys in the same object.
        let disk: DiskRecord = serde_json::from_value(json!({
            "filesystem": "/dev/sda1",
            "mounted_on": "/",
            "used_str": "50G",
            "total_str": "100G",
            "use_percent_str": "50%"
        }))
        .unwrap();
        assert_eq!(disk.summary_line(), "/dev/sda1: 50G GB used of 100G GB (50%)");
    }

    #[test]
    fn disk_record_falls_back_to_mount_point_then_caption() {
        let disk: DiskRecord =
            serde_json::from_value(json!({ "mounted_on": "/srv" })).unwrap();
        assert_eq!(disk.display_name(), "/srv");
        let disk: DiskRecord = serde_json::from_value(json!({ "caption": "C:" })).unwrap();
        assert_eq!(disk.display_name(), "C:");
        assert_eq!(DiskRecord::default().display_name(), "N/A");
    }

    #[test]
    fn disk_record_numeric_fields_win_over_str_siblings() {
        let disk: DiskRecord = serde_json::from_value(json!({
            "filesystem": "/dev/sda1",
            "used_gb": 50,
            "total_gb": 100,
            "use_percent": "50%"
        }))
        .unwrap();
        assert_eq!(disk.summary_line(), "/dev/sda1: 50 GB used of 100 GB (50%)");
    }

    #[test]
    fn device_list_deserializes_both_shapes() {
        let listed: DeviceList<DiskDevice> =
            serde_json::from_value(json!([{ "name": "root", "path": "/" }])).unwrap();
        assert!(matches!(listed, DeviceList::Listed(ref items) if items.len() == 1));

        let verbatim: DeviceList<DiskDevice> =
            serde_json::from_value(json!("No disk devices found or usage not reported.")).unwrap();
        assert!(matches!(verbatim, DeviceList::Verbatim(_)));
    }

    #[test]
    fn disk_device_usage_requires_both_real_values() {
        let device: DiskDevice = serde_json::from_value(json!({
            "name": "root", "used": "7.2GiB", "total": "20GiB"
        }))
        .unwrap();
        assert_eq!(
            device.usage(),
            Some(("7.2GiB".to_string(), "20GiB".to_string()))
        );

        // The agent sends literal "N/A" placeholders when usage is unknown.
        let device: DiskDevice = serde_json::from_value(json!({
            "name": "root", "used": "N/A", "total": "20GiB"
        }))
        .unwrap();
        assert_eq!(device.usage(), None);

        let device: DiskDevice =
            serde_json::from_value(json!({ "name": "root", "used": "7.2GiB" })).unwrap();
        assert_eq!(device.usage(), None);
    }

    #[test]
    fn gpu_device_accepts_pci_alias_and_null_fields() {
        let device: GpuDevice = serde_json::from_value(json!({
            "name": "gpu0", "vendor": null, "pci": "0000:0a:00.0"
        }))
        .unwrap();
        assert_eq!(device.pci_address.as_deref(), Some("0000:0a:00.0"));
        assert_eq!(device.vendor, None);
    }

    #[test]
    fn container_record_display_fallbacks() {
        let record: ContainerRecord = serde_json::from_value(json!({
            "name": "web01", "status": "Running", "memory_usage_mb": "N/A"
        }))
        .unwrap();
        assert_eq!(record.title(), "web01 (Status: Running)");
        assert_eq!(record.owner_display(), "N/A");
        assert_eq!(record.ipv4_display(), "N/A");
        assert_eq!(record.memory_display(), "N/A");

        let record: ContainerRecord = serde_json::from_value(json!({
            "name": "web01",
            "status": "Running",
            "user_owner": "ops",
            "ipv4": ["10.0.0.5", "10.0.0.6"],
            "memory_usage_mb": 512.5
        }))
        .unwrap();
        assert_eq!(record.owner_display(), "ops");
        assert_eq!(record.ipv4_display(), "10.0.0.5, 10.0.0.6");
        assert_eq!(record.memory_display(), "512.5");
    }

    #[test]
    fn error_envelope_round_trip() {
        let value = json!({ "error": "Failed to execute nvidia-smi", "details": "not found" });
        let envelope = ErrorEnvelope::from_value(&value).unwrap();
        assert_eq!(envelope.error, "Failed to execute nvidia-smi");
        assert_eq!(envelope.details.as_deref(), Some("not found"));
        assert_eq!(envelope.into_value(), value);

        assert_eq!(ErrorEnvelope::from_value(&json!({ "data": [] })), None);
        assert_eq!(ErrorEnvelope::from_value(&json!({ "error": null })), None);
    }
}
