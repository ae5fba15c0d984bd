pub const ANCHOR_OFFSET: f64 = 80.0;

// "#tours", or "/#tours" on the home page. Anything else navigates normally.
pub fn fragment<'a>(href: &'a str, current_path: &str) -> Option<&'a str> {
    let (path, id) = href.split_once('#')?;
    if id.is_empty() || !(path.is_empty() || path == current_path) {
        return None;
    }
    Some(id)
}

pub fn scroll_top_for(target_rect_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (target_rect_top + scroll_y - offset).max(0.0)
}

pub fn link_matches_section(href: &str, section_id: &str) -> bool {
    !section_id.is_empty() && href.contains(&format!("#{}", section_id))
}

pub fn active_links<'a, I>(hrefs: I, section_id: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .map(|href| href.map_or(false, |h| link_matches_section(h, section_id)))
        .collect()
}
