//! Help text content for the help modal

pub fn help_text() -> Vec<&'static str> {
    vec![
        "Selection:",
        "  Click            Select one cell",
        "  Drag             Select a rectangle",
        "  Shift+Click      Extend from the anchor",
        "  Ctrl+Shift+Click Add a rectangle to the selection",
        "  Ctrl+Click       Add or remove one cell",
        "  Space            Add or remove the focused cell",
        "  Esc              Clear the selection",
        "",
        "Navigation:",
        "  Arrows / hjkl    Move one cell",
        "  Shift+Arrows     Extend the selection",
        "  Ctrl+Arrows      Jump to the first/last row or column",
        "  Home/End         First/last column",
        "  Ctrl+Home/End    First/last cell",
        "  PageUp/Down      Move by a page",
        "  g / :            Go to a cell (e.g. 3:qty)",
        "",
        "Lines:",
        "  o / O            Insert lines below/above",
        "  a                Append a line",
        "  J / K, Alt+Up/Dn Move the focused line",
        "  d / Delete       Delete the selected lines",
        "",
        "Editing:",
        "  i / Enter / F2   Edit the focused cell",
        "  Enter            Keep the edit",
        "  Esc              Put the old value back",
        "  Ctrl+U           Clear to the start of the input",
        "",
        "Export:",
        "  y / Ctrl+C       Copy the selection as CSV",
        "  e                Save the selection to a CSV file",
        "  E                Export all lines to CSV",
        "",
        "Other:",
        "  ?                This help",
        "  q                Quit",
    ]
}
