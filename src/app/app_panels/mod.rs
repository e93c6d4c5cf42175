mod sidebar;
mod top_bar;
