// TUI Tests Module - Testing the public tui module
// Tests organized by TUI module structure:
// - menu_tests: pure transitions and surface rendering
// - app_tests: App key handling and state
// - types_tests: MenuModel and SelectionState
// - ui_tests: terminal drawing and UI helpers

mod menu_tests;
