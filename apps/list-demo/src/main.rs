//! Console demo: a fixed-height task list driven through the itemtouch
//! controller with synthetic pointer gestures. Runs in real time off a
//! `web_time::Instant` clock, exactly the way a windowed frame loop would
//! drive it.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::thread::sleep;
use std::time::Duration;

use itemtouch::{
    ActionState, Direction, DirectionFlags, ItemContainer, ItemId, ItemTouchHelper,
    MovementFlags, TouchCallback,
};
use itemtouch_geometry::{Point, Rect, Size};
use web_time::Instant;

const ROW_HEIGHT: f32 = 64.0;
const ROW_WIDTH: f32 = 360.0;
const FRAME: Duration = Duration::from_millis(8);

/// Vertical list with instant relayout; rows are positioned purely by their
/// index in the shared order.
struct TaskList {
    order: Rc<RefCell<Vec<ItemId>>>,
    viewport: Size,
    scroll_offset: f32,
    translations: HashMap<ItemId, Point>,
}

impl TaskList {
    fn new(order: Rc<RefCell<Vec<ItemId>>>) -> Self {
        Self {
            order,
            viewport: Size::new(ROW_WIDTH, 512.0),
            scroll_offset: 0.0,
            translations: HashMap::new(),
        }
    }

    fn index_of(&self, item: ItemId) -> Option<usize> {
        self.order.borrow().iter().position(|&i| i == item)
    }
}

impl ItemContainer for TaskList {
    fn child_count(&self) -> usize {
        self.order.borrow().len()
    }

    fn child_at(&self, index: usize) -> Option<ItemId> {
        self.order.borrow().get(index).copied()
    }

    fn item_bounds(&self, item: ItemId) -> Option<Rect> {
        let index = self.index_of(item)?;
        Some(Rect::new(
            0.0,
            index as f32 * ROW_HEIGHT - self.scroll_offset,
            ROW_WIDTH,
            ROW_HEIGHT,
        ))
    }

    fn translation(&self, item: ItemId) -> Point {
        self.translations.get(&item).copied().unwrap_or(Point::ZERO)
    }

    fn set_translation(&mut self, item: ItemId, translation: Point) {
        self.translations.insert(item, translation);
    }

    fn size(&self) -> Size {
        self.viewport
    }

    fn can_scroll_horizontally(&self) -> bool {
        false
    }

    fn can_scroll_vertically(&self) -> bool {
        false
    }

    fn scroll_by(&mut self, _dx: f32, dy: f32) {
        self.scroll_offset += dy;
    }

    fn scroll_to_position(&mut self, position: usize) {
        log::debug!("scroll_to_position({position})");
    }

    fn item_under(&self, x: f32, y: f32) -> Option<ItemId> {
        if !(0.0..=ROW_WIDTH).contains(&x) {
            return None;
        }
        let index = ((y + self.scroll_offset) / ROW_HEIGHT).floor();
        if index < 0.0 {
            return None;
        }
        self.order.borrow().get(index as usize).copied()
    }

    fn adapter_position(&self, item: ItemId) -> Option<usize> {
        self.index_of(item)
    }

    fn is_attached_child(&self, item: ItemId) -> bool {
        self.index_of(item).is_some()
    }

    fn perform_haptic_feedback(&mut self, item: ItemId) {
        log::debug!("buzz for {item:?}");
    }
}

/// Tasks reorder on drag and are dismissed by horizontal swipe.
struct TaskPolicy {
    order: Rc<RefCell<Vec<ItemId>>>,
    labels: Rc<RefCell<HashMap<ItemId, String>>>,
    dismissed: Rc<RefCell<Vec<ItemId>>>,
}

impl TaskPolicy {
    fn label(&self, item: ItemId) -> String {
        self.labels
            .borrow()
            .get(&item)
            .cloned()
            .unwrap_or_else(|| format!("{item:?}"))
    }
}

impl TouchCallback for TaskPolicy {
    fn movement_flags(&self, _container: &dyn ItemContainer, _item: ItemId) -> MovementFlags {
        MovementFlags::new(
            DirectionFlags::of(&[Direction::Up, Direction::Down]),
            DirectionFlags::of(&[Direction::Start, Direction::End]),
        )
    }

    fn on_move(
        &mut self,
        _container: &mut dyn ItemContainer,
        dragged: ItemId,
        target: ItemId,
    ) -> bool {
        log::info!("reorder: {} over {}", self.label(dragged), self.label(target));
        let mut order = self.order.borrow_mut();
        let from = order.iter().position(|&i| i == dragged).unwrap();
        let to = order.iter().position(|&i| i == target).unwrap();
        let item = order.remove(from);
        order.insert(to, item);
        true
    }

    fn on_swiped(&mut self, _container: &mut dyn ItemContainer, item: ItemId, direction: Direction) {
        log::info!("dismissed {} towards {direction:?}", self.label(item));
        self.order.borrow_mut().retain(|&i| i != item);
        self.dismissed.borrow_mut().push(item);
    }

    fn on_selected_changed(
        &mut self,
        _container: &mut dyn ItemContainer,
        item: Option<ItemId>,
        action_state: ActionState,
    ) {
        match item {
            Some(item) => log::info!("grabbed {} ({action_state:?})", self.label(item)),
            None => log::info!("released"),
        }
    }
}

struct Demo {
    helper: ItemTouchHelper,
    list: TaskList,
    clock: Instant,
    dismissed: Rc<RefCell<Vec<ItemId>>>,
}

impl Demo {
    fn now_ms(&self) -> u64 {
        self.clock.elapsed().as_millis() as u64
    }

    /// One frame: pulse the controller, flush host-side dismissals, wait.
    fn frame(&mut self) -> bool {
        let now_ms = self.now_ms();
        let busy = self.helper.advance_frame(&mut self.list, now_ms);
        let dismissed: Vec<ItemId> = self.dismissed.borrow_mut().drain(..).collect();
        for item in dismissed {
            self.helper.on_item_detached(&mut self.list, item);
        }
        sleep(FRAME);
        busy
    }

    fn run_frames_until_idle(&mut self) {
        while self.frame() {}
    }

    fn print_order(&self, labels: &HashMap<ItemId, String>) {
        let order = self.list.order.borrow();
        let rows: Vec<&str> = order
            .iter()
            .map(|item| labels[item].as_str())
            .collect();
        println!("  [{}]", rows.join(", "));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let names = ["Inbox", "Groceries", "Call mum", "Fix the bike", "Water plants"];
    let order: Rc<RefCell<Vec<ItemId>>> =
        Rc::new(RefCell::new((0..names.len() as u64).map(ItemId).collect()));
    let labels: Rc<RefCell<HashMap<ItemId, String>>> = Rc::new(RefCell::new(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| (ItemId(i as u64), name.to_string()))
            .collect(),
    ));
    let dismissed = Rc::new(RefCell::new(Vec::new()));

    let policy = TaskPolicy {
        order: order.clone(),
        labels: labels.clone(),
        dismissed: dismissed.clone(),
    };
    let mut helper = ItemTouchHelper::new(Box::new(policy));
    helper.attach();

    let mut demo = Demo {
        helper,
        list: TaskList::new(order),
        clock: Instant::now(),
        dismissed,
    };
    let label_snapshot = labels.borrow().clone();

    println!("=== itemtouch console demo ===");
    println!("initial order:");
    demo.print_order(&label_snapshot);

    // --- scenario 1: long-press the second row and drag it down one slot ---
    println!();
    println!("long-press 'Groceries' and drag it below 'Call mum'...");
    let x = ROW_WIDTH / 2.0;
    let mut y = ROW_HEIGHT * 1.5;
    let now = demo.now_ms();
    demo.helper.on_pointer_down(&mut demo.list, 1, x, y, now);
    while demo.helper.selected_item().is_none() {
        demo.frame();
    }
    for _ in 0..20 {
        y += 4.5;
        let now = demo.now_ms();
        demo.helper.on_pointer_move(&mut demo.list, 1, x, y, now);
        demo.frame();
    }
    let now = demo.now_ms();
    demo.helper.on_pointer_up(&mut demo.list, 1, x, y, now);
    demo.run_frames_until_idle();
    println!("after the drag:");
    demo.print_order(&label_snapshot);

    // --- scenario 2: fling the top row off to the end side ---
    println!();
    println!("fling 'Inbox' away...");
    let mut x = 40.0;
    let y = ROW_HEIGHT / 2.0;
    let now = demo.now_ms();
    demo.helper.on_pointer_down(&mut demo.list, 1, x, y, now);
    for _ in 0..8 {
        x += 14.0;
        let now = demo.now_ms();
        demo.helper.on_pointer_move(&mut demo.list, 1, x, y, now);
        sleep(Duration::from_millis(6));
    }
    let now = demo.now_ms();
    demo.helper.on_pointer_up(&mut demo.list, 1, x, y, now);
    demo.run_frames_until_idle();
    println!("after the swipe:");
    demo.print_order(&label_snapshot);

    demo.helper.detach(&mut demo.list);
    log::info!("demo finished in {:?}", demo.clock.elapsed());
}
