//! Launcher window, buttons and message loop using the Win32 API

use std::cell::RefCell;
use std::ffi::c_void;

use anyhow::{Context, Result, bail};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{BeginPaint, COLOR_WINDOW, EndPaint, FillRect, HBRUSH, PAINTSTRUCT};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    BS_DEFPUSHBUTTON, CREATESTRUCTW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW,
    DispatchMessageW, GWLP_USERDATA, GetClientRect, GetMessageW, GetSystemMetrics,
    GetWindowLongPtrW, GetWindowRect, HMENU, IDC_ARROW, LoadCursorW, MSG, PostQuitMessage,
    RegisterClassW, SM_CXSCREEN, SM_CYSCREEN, SW_SHOWDEFAULT, SWP_NOSIZE, SWP_NOZORDER,
    SetWindowLongPtrW, SetWindowPos, ShowWindow, TranslateMessage, WINDOW_EX_STYLE, WINDOW_STYLE,
    WM_COMMAND, WM_DESTROY, WM_NCCREATE, WM_PAINT, WNDCLASSW, WS_CHILD, WS_MINIMIZEBOX,
    WS_OVERLAPPED, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
};
use windows::core::{HSTRING, PCWSTR, w};

use crate::app::{EXIT_OK, Launcher, pump_status};
use crate::model::{Effect, Phase, WindowEvent};
use crate::opener::UrlHandler;
use crate::platform::windows::alert::NativeAlert;
use crate::ui::layout::{button_rect, centered_origin, window_size};

/// State reachable from the window procedure through `GWLP_USERDATA`.
struct WindowContext<'a> {
    launcher: &'a Launcher,
    handler: &'a dyn UrlHandler,
    alert: &'a NativeAlert,
    buttons: RefCell<Vec<HWND>>,
}

/// Detaches the context from the window when `run_launcher` returns, so
/// messages pumped by a later alert never see a dangling pointer.
struct ContextGuard(HWND);

impl Drop for ContextGuard {
    fn drop(&mut self) {
        // SAFETY: clearing user data on a window we created is always valid.
        unsafe {
            SetWindowLongPtrW(self.0, GWLP_USERDATA, 0);
        }
    }
}

/// Creates the window and one button per entry, then pumps messages until
/// the window closes or a button has been handled.
pub fn run_launcher(
    launcher: &Launcher,
    handler: &dyn UrlHandler,
    alert: &NativeAlert,
) -> Result<i32> {
    let context = WindowContext {
        launcher,
        handler,
        alert,
        buttons: RefCell::new(Vec::with_capacity(launcher.entries.len())),
    };
    let layout = &launcher.config.layout;
    let title = HSTRING::from(launcher.config.window.title.as_str());

    unsafe {
        let instance: HINSTANCE = GetModuleHandleW(PCWSTR::null())
            .context("Could not get module handle")?
            .into();

        let class = WNDCLASSW {
            lpfnWndProc: Some(window_proc),
            hInstance: instance,
            hCursor: LoadCursorW(HINSTANCE::default(), IDC_ARROW).unwrap_or_default(),
            lpszClassName: PCWSTR(title.as_ptr()),
            ..Default::default()
        };
        if RegisterClassW(&class) == 0 {
            bail!("Could not register class");
        }

        let (width, height) = window_size(layout, launcher.entries.len());
        let parent = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            &title,
            &title,
            WS_OVERLAPPED | WS_MINIMIZEBOX | WS_SYSMENU,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            width,
            height,
            HWND::default(),
            HMENU::default(),
            instance,
            Some(&context as *const WindowContext as *const c_void),
        )
        .context("Could not create parent window")?;
        let _guard = ContextGuard(parent);
        alert.set_owner(parent);
        launcher.advance(Phase::WindowCreated);

        let mut window_rect = RECT::default();
        GetWindowRect(parent, &mut window_rect)
            .context("Could not get window rect of parent window")?;
        let screen = (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN));
        let size = (
            window_rect.right - window_rect.left,
            window_rect.bottom - window_rect.top,
        );
        let (x, y) = centered_origin(screen, size);
        SetWindowPos(parent, HWND::default(), x, y, 0, 0, SWP_NOZORDER | SWP_NOSIZE)
            .context("Could not set parent window position")?;

        let _ = ShowWindow(parent, SW_SHOWDEFAULT);

        let mut client_rect = RECT::default();
        GetClientRect(parent, &mut client_rect)
            .context("Could not get client rect of parent window")?;

        for (index, entry) in launcher.entries.iter().enumerate() {
            let rect = button_rect(layout, client_rect.right, client_rect.top, index);
            let button = CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                w!("BUTTON"),
                &HSTRING::from(entry.label.as_str()),
                WS_TABSTOP | WS_VISIBLE | WS_CHILD | WINDOW_STYLE(BS_DEFPUSHBUTTON as u32),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                parent,
                HMENU::default(),
                instance,
                None,
            )
            .with_context(|| format!("Could not create button window {}", index))?;
            context.buttons.borrow_mut().push(button);
            log::debug!("Placed button {} for {:?}", index, entry.label);
        }
        launcher.advance(Phase::ButtonsPlaced);

        launcher.advance(Phase::Running);
        log::info!("Launcher running with {} button(s)", launcher.entries.len());

        let mut message = MSG::default();
        while pump_status(GetMessageW(&mut message, HWND::default(), 0, 0).0)
            .inspect_err(|_| log::error!("GetMessageW failed: {}", windows::core::Error::from_win32()))?
        {
            let _ = TranslateMessage(&message);
            DispatchMessageW(&message);
        }
    }

    Ok(EXIT_OK)
}

extern "system" fn window_proc(hwnd: HWND, message: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        if message == WM_NCCREATE {
            let create = &*(lparam.0 as *const CREATESTRUCTW);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, create.lpCreateParams as isize);
            return DefWindowProcW(hwnd, message, wparam, lparam);
        }

        let context = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const WindowContext;
        if context.is_null() {
            return DefWindowProcW(hwnd, message, wparam, lparam);
        }
        // SAFETY: the pointer is cleared by ContextGuard before the context is dropped.
        let context = &*context;

        let event = match message {
            WM_DESTROY => WindowEvent::Destroy,
            WM_PAINT => WindowEvent::Paint,
            WM_COMMAND => {
                let source = HWND(lparam.0 as *mut c_void);
                let position = context.buttons.borrow().iter().position(|b| *b == source);
                match position {
                    Some(index) => WindowEvent::Command(index),
                    None => return DefWindowProcW(hwnd, message, wparam, lparam),
                }
            }
            _ => return DefWindowProcW(hwnd, message, wparam, lparam),
        };

        let effects = context.launcher.handle(event);
        if effects.is_empty() {
            return DefWindowProcW(hwnd, message, wparam, lparam);
        }
        for effect in effects {
            match effect {
                Effect::FillBackground => fill_background(hwnd),
                Effect::OpenEntry(index) => {
                    context.launcher.open(index, context.handler, context.alert);
                }
                Effect::Quit(code) => PostQuitMessage(code),
            }
        }
        LRESULT(0)
    }
}

unsafe fn fill_background(hwnd: HWND) {
    let mut paint = PAINTSTRUCT::default();
    // SAFETY: called only while handling WM_PAINT for `hwnd`.
    unsafe {
        let hdc = BeginPaint(hwnd, &mut paint);
        FillRect(hdc, &paint.rcPaint, HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut c_void));
        let _ = EndPaint(hwnd, &paint);
    }
}
