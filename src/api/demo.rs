//! Canned responses for `--demo` mode.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::client::HostApi;

/// Serves representative fake data for every feed so the console can be
/// exercised without a running host agent.
pub struct DemoApi;

#[async_trait]
impl HostApi for DemoApi {
    async fn fetch_structured(&self, endpoint: &str) -> Value {
        match endpoint {
            "cpu-info" => json!([{
                "Name": "AMD Ryzen 9 5950X 16-Core Processor",
                "Manufacturer": "AuthenticAMD",
                "MaxClockSpeed": 3400,
                "NumberOfCores": 16,
                "NumberOfLogicalProcessors": 32
            }]),
            "gpu-info" => json!([{
                "name": "NVIDIA GeForce RTX 3090",
                "pci_bus_id": "00000000:0A:00.0",
                "driver_version": "550.54.14",
                "temperature_gpu": 61.0,
                "utilization_gpu": 37.0,
                "utilization_memory": 22.0,
                "memory_total_mb": 24576.0,
                "memory_free_mb": 15360.0,
                "memory_used_mb": 9216.0
            }]),
            "ram-disk" => json!({
                "ram": { "total_mb": 64213, "used_mb": 21380, "available_mb": 42833 },
                "disk": [
                    {
                        "filesystem": "/dev/nvme0n1p2",
                        "total_str": "932G",
                        "used_str": "412G",
                        "available_str": "473G",
                        "use_percent_str": "47%",
                        "mounted_on": "/"
                    },
                    {
                        "filesystem": "/dev/sda1",
                        "total_str": "3.7T",
                        "used_str": "1.2T",
                        "available_str": "2.3T",
                        "use_percent_str": "35%",
                        "mounted_on": "/srv/tank"
                    }
                ]
            }),
            "lxc" => json!([
                {
                    "name": "build-runner",
                    "status": "Running",
                    "user_owner": "ci",
                    "ipv4": ["10.114.27.5"],
                    "ipv6": [],
                    "memory_usage_mb": 1843.2,
                    "disk_devices": [
                        { "name": "root", "path": "/", "pool": "default",
                          "total": "20GiB", "used": "7.2GiB" }
                    ],
                    "gpu_devices": "No GPU devices configured."
                },
                {
                    "name": "inference",
                    "status": "Running",
                    "user_owner": "ml",
                    "ipv4": ["10.114.27.9"],
                    "ipv6": ["fd42:dead:beef::9"],
                    "memory_usage_mb": 12288.0,
                    "disk_devices": "No disk devices found or usage not reported.",
                    "gpu_devices": [
                        { "name": "gpu0", "vendor": "NVIDIA", "product": "GA102 [GeForce RTX 3090]",
                          "pci_address": "0000:0a:00.0" }
                    ]
                }
            ]),
            _ => Value::Null,
        }
    }

    async fn fetch_text(&self, _endpoint: &str) -> String {
        DEMO_TOP.to_string()
    }
}

const DEMO_TOP: &str = "\
top - 14:32:07 up 41 days,  3:12,  1 user,  load average: 1.42, 1.18, 0.97
Tasks: 412 total,   2 running, 410 sleeping,   0 stopped,   0 zombie
%Cpu(s):  8.3 us,  2.1 sy,  0.0 ni, 89.1 id,  0.3 wa,  0.0 hi,  0.2 si
MiB Mem :  64213.1 total,  18242.5 free,  21380.4 used,  24590.2 buff/cache

    PID USER      PR  NI    VIRT    RES    SHR S  %CPU  %MEM     TIME+ COMMAND
   2841 ml        20   0   41.2g  11.8g   1.1g S  312.0  18.8  5123:44 python3
   1203 ci        20   0    8.9g   1.7g   312m S   24.6   2.7 1841:02 buildd
      1 root      20   0  168640  12936   8400 S    0.0   0.0  41:12.33 systemd
";
