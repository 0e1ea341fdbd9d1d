use {
    anyhow::{Context as _, Result},
    std::io::Read,
};

/// 行中で最初に現れる数字列を読む.
///
/// in: `"VmData:\t   42964 kB"`
/// out: `Some(42964)`
fn number_in_line(line: &str) -> Option<u64> {
    let digits = line
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .split(|c: char| !c.is_ascii_digit())
        .next()?;
    digits.parse().ok()
}

/// `/proc/<pid>/status` の形式のテキストから `VmData` と `VmStk` を読み, その和をバイト単位で返す.
pub fn memory_usage(mut status: impl Read) -> Result<u64> {
    let mut body = String::new();
    status
        .read_to_string(&mut body)
        .context("failed to read process status")?;

    let mut vm_data = None;
    let mut vm_stk = None;

    for line in body.lines() {
        if line.starts_with("VmData") {
            vm_data = number_in_line(line);
        } else if line.starts_with("VmStk") {
            vm_stk = number_in_line(line);
        }
    }

    let vm_data = vm_data.context("VmData not found in process status")?;
    let vm_stk = vm_stk.context("VmStk not found in process status")?;

    // both are in kB
    Ok((vm_data + vm_stk) * 1024)
}

/// 自プロセスのメモリ使用量.
#[cfg(target_os = "linux")]
pub fn current_memory_usage() -> Result<u64> {
    let file = std::fs::File::open("/proc/self/status")
        .context("failed to open /proc/self/status")?;
    memory_usage(file)
}
