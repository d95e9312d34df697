use ratatui::layout::Rect;
use todolist::ui::LayoutManager;

#[test]
fn test_main_layout_regions() {
    let areas = LayoutManager::main_layout(Rect::new(0, 0, 80, 24));

    assert_eq!(areas.title, Rect::new(0, 0, 80, 1));
    assert_eq!(areas.action_bar, Rect::new(0, 1, 80, 3));
    assert_eq!(areas.task_list, Rect::new(0, 4, 80, 19));
    assert_eq!(areas.status_bar, Rect::new(0, 23, 80, 1));
}

#[test]
fn test_centered_rect_lines() {
    let area = Rect::new(0, 0, 100, 30);
    let popup = LayoutManager::centered_rect_lines(60, 9, area);

    assert_eq!(popup.height, 9);
    assert_eq!(popup.width, 60);
    assert_eq!(popup.x, 20);
}
