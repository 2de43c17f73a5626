use crate::{CoreResult, RecorderError};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use windows::{
    Win32::{
        Foundation::CloseHandle,
        System::Threading::{
            OpenProcess, PROCESS_NAME_FORMAT, PROCESS_QUERY_LIMITED_INFORMATION,
            QueryFullProcessImageNameW,
        },
        UI::WindowsAndMessaging::{GetForegroundWindow, GetWindowThreadProcessId},
    },
    core::PWSTR,
};

/// Executable name (e.g. `WindowsTerminal.exe`) of the foreground window's process.
#[track_caller]
pub(super) fn foreground_app_name() -> CoreResult<String> {
    let unavailable = |reason: String| RecorderError::ProbeUnavailable {
        reason,
        location: ErrorLocation::from(Location::caller()),
    };

    let image_path = unsafe {
        let hwnd = GetForegroundWindow();
        if hwnd.0 == 0 {
            return Err(unavailable("No foreground window".to_string()));
        }

        let mut pid: u32 = 0;
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
        if pid == 0 {
            return Err(unavailable("Foreground window has no process".to_string()));
        }

        let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid)
            .map_err(|e| unavailable(format!("OpenProcess({}) failed: {}", pid, e)))?;

        let mut buffer = vec![0u16; 512];
        let mut size: u32 = buffer.len() as u32;
        let queried = QueryFullProcessImageNameW(
            handle,
            PROCESS_NAME_FORMAT(0),
            PWSTR(buffer.as_mut_ptr()),
            &mut size,
        );
        let _ = CloseHandle(handle);
        queried.map_err(|e| unavailable(format!("QueryFullProcessImageNameW failed: {}", e)))?;

        String::from_utf16_lossy(&buffer[..size as usize])
    };

    let file_name = Path::new(&image_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    Ok(file_name.unwrap_or(image_path))
}
