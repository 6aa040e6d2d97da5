use ratatui::layout::Rect;

/// Split the frame into header, body, and footer regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 4.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// On-screen rect of one panel of the virtual document, if any of it is
/// inside the body at the given scroll offset.
pub fn panel_rect(body: Rect, panel_index: usize, panel_rows: u16, scroll: u16) -> Option<Rect> {
    let top = panel_index as i32 * panel_rows as i32 - scroll as i32;
    let bottom = top + panel_rows as i32;
    let visible_top = top.max(0);
    let visible_bottom = bottom.min(body.height as i32);
    if visible_bottom <= visible_top {
        return None;
    }
    Some(Rect {
        x: body.x,
        y: body.y + visible_top as u16,
        width: body.width,
        height: (visible_bottom - visible_top) as u16,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> Rect {
        Rect {
            x: 0,
            y: 3,
            width: 80,
            height: 14,
        }
    }

    #[test]
    fn panel_fully_on_screen() {
        let rect = panel_rect(body(), 0, 7, 0).unwrap();
        assert_eq!((rect.y, rect.height), (3, 7));
    }

    #[test]
    fn panel_clipped_by_scroll() {
        let rect = panel_rect(body(), 0, 7, 4).unwrap();
        assert_eq!((rect.y, rect.height), (3, 3));
    }

    #[test]
    fn panel_below_the_fold_is_hidden() {
        assert!(panel_rect(body(), 3, 7, 0).is_none());
    }
}
