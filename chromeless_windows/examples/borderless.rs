//! Minimal borderless window driven by the interceptor: the top strip drags
//! the window, every edge resizes, maximize lands on the work area.

#[cfg(windows)]
mod demo {
    use std::rc::Rc;

    use chromeless_windows::{
        Interceptor, InterceptorConfig, Margins, Point, Size, WindowTester,
    };
    use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
    use windows::Win32::Graphics::Gdi::ValidateRect;
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::Win32::UI::WindowsAndMessaging::{
        CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, IDC_ARROW,
        LoadCursorW, MSG, PostQuitMessage, RegisterClassW, TranslateMessage, WINDOW_EX_STYLE,
        WM_DESTROY, WM_PAINT, WNDCLASSW, WS_OVERLAPPEDWINDOW, WS_VISIBLE,
    };
    use windows::core::w;

    /// Everything above 48px acts as the caption; the maximized frame is
    /// pushed off screen by the usual 8px border.
    struct TopStrip;

    impl WindowTester for TopStrip {
        fn maximized_margins(&self) -> Margins {
            Margins::uniform(8)
        }

        fn hit_test(&self, point: Point) -> bool {
            point.y >= 48
        }
    }

    extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
        unsafe {
            match msg {
                WM_PAINT => {
                    let _ = ValidateRect(Some(hwnd), None);
                    LRESULT(0)
                }
                WM_DESTROY => {
                    PostQuitMessage(0);
                    LRESULT(0)
                }
                _ => DefWindowProcW(hwnd, msg, wparam, lparam),
            }
        }
    }

    pub fn run() -> chromeless_windows::Result<()> {
        unsafe {
            let instance = GetModuleHandleW(None)?;
            let class_name = w!("ChromelessDemo");

            let wc = WNDCLASSW {
                lpfnWndProc: Some(wndproc),
                hInstance: instance.into(),
                hCursor: LoadCursorW(None, IDC_ARROW)?,
                lpszClassName: class_name,
                ..Default::default()
            };
            let atom = RegisterClassW(&wc);
            debug_assert!(atom != 0);

            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                class_name,
                w!("chromeless demo"),
                WS_OVERLAPPEDWINDOW | WS_VISIBLE,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                960,
                600,
                None,
                None,
                Some(instance.into()),
                None,
            )?;

            let tester: Rc<dyn WindowTester> = Rc::new(TopStrip);
            let config = InterceptorConfig {
                min_size: Size {
                    width: 320,
                    height: 200,
                },
                ..InterceptorConfig::default()
            };
            let _interceptor =
                Interceptor::attach_with_tester(hwnd, config, Rc::downgrade(&tester))?;

            let mut msg = MSG::default();
            while GetMessageW(&mut msg, None, 0, 0).into() {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }

            Ok(())
        }
    }
}

#[cfg(windows)]
fn main() -> chromeless_windows::Result<()> {
    env_logger::init();
    demo::run()
}

#[cfg(not(windows))]
fn main() {}
