//! Content of the checklist every new user starts with

pub(crate) const INTRO_TITLE: &str = "My First Listo";

pub(crate) const INTRO_ITEMS: [&str; 10] = [
    "Edit the title of this Listo by clicking on the title. Your changes will be saved automatically.",
    "Edit this item by clicking on it, making your changes, and clicking away, or <return>",
    "Add a new item to your Listo next to the + icon",
    "You can make a multi-line item by pressing <shift> + <return>",
    "Mark this item as done, by clicking on the checkbox",
    "Reorder this item by dragging it somewhere else, and dropping it",
    "Delete your checked items by selecting \"Delete Checked\" from the options dropdown",
    "Lock your Listo by selecting \"Lock\" from the options dropdown. You'll still be able to check/uncheck items, but can't change them. This is handy if you have checklists that you need to reuse.",
    "Share your Listo with others by selecting \"Share\" from the options dropdown. You can share with anyone, even if they don't have an account yet.",
    "Have fun!",
];
