extern crate kutulu;

use kutulu::{
    Cell, Command, Coord, EntityRecord, GameConstants, Grid, MinionState, Strategy, World,
    ENTITY_TYPE_EXPLORER, ENTITY_TYPE_WANDERER, EVASION_RADIUS,
};

use flo_canvas::*;
use flo_draw::*;

use futures::executor;
use futures::prelude::*;

use rand::Rng;

const MAP_WIDTH: usize = 19;
const MAP_HEIGHT: usize = 15;
const ACTIVE_WANDERERS: i32 = 3;
const SPAWNING_WANDERERS: i32 = 2;

const SIM_CONSTANTS: GameConstants = GameConstants {
    sanity_loss_lonely: 3,
    sanity_loss_group: 1,
    wanderer_spawn_time: 3,
    wanderer_life_time: 40,
};

/// A hand-rolled referee: keeps the entity lines the bot would receive and advances them.
struct SimWorld {
    grid: Grid,
    records: Vec<EntityRecord>,
}

fn gen_map_rows(rng: &mut impl Rng) -> Vec<String> {
    (0..MAP_HEIGHT)
        .map(|y| {
            (0..MAP_WIDTH)
                .map(|x| {
                    let border = x == 0 || y == 0 || x == MAP_WIDTH - 1 || y == MAP_HEIGHT - 1;
                    if border || rng.gen_bool(0.2) {
                        '#'
                    } else if rng.gen_bool(0.03) {
                        'w'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

fn random_empty_cell(grid: &Grid, rng: &mut impl Rng) -> Coord {
    let empties = grid.empty_cells().collect::<Vec<_>>();
    empties[rng.gen_range(0..empties.len())]
}

impl SimWorld {
    fn gen_random_world() -> Self {
        let mut rng = rand::thread_rng();

        let grid = loop {
            let rows = gen_map_rows(&mut rng);
            let grid = Grid::parse(MAP_WIDTH, MAP_HEIGHT, rows.iter().map(String::as_str))
                .expect("generated map uses only known cells");
            if grid.empty_cells().count() >= MAP_WIDTH {
                break grid;
            }
        };

        let mut lines = Vec::new();
        let me = random_empty_cell(&grid, &mut rng);
        lines.push(format!("{ENTITY_TYPE_EXPLORER} 0 {me} 250 2 3"));

        for id in 1..=ACTIVE_WANDERERS {
            let pos = random_empty_cell(&grid, &mut rng);
            let recall = rng.gen_range(1..=SIM_CONSTANTS.wanderer_life_time);
            lines.push(format!("{ENTITY_TYPE_WANDERER} {id} {pos} {recall} 1 0"));
        }

        for i in 0..SPAWNING_WANDERERS {
            let id = ACTIVE_WANDERERS + 1 + i;
            let pos = random_empty_cell(&grid, &mut rng);
            let spawn = SIM_CONSTANTS.wanderer_spawn_time;
            lines.push(format!("{ENTITY_TYPE_WANDERER} {id} {pos} {spawn} 0 0"));
        }

        let records = lines
            .iter()
            .map(|line| line.parse::<EntityRecord>())
            .collect::<kutulu::Result<Vec<_>>>()
            .expect("generated entity lines are well formed");

        SimWorld { grid, records }
    }

    fn build_world(&self) -> World {
        World::classify(&self.records).expect("simulated entities are well formed")
    }

    fn walkable(&self, pos: Coord) -> bool {
        matches!(self.grid.cell(pos), Some(Cell::Empty) | Some(Cell::SpawnPoint))
    }

    /// Applies the bot's command, then moves and ages the wanderers.
    fn step(&mut self, command: Command) {
        let mut me = self.records[0].coord;
        if let Command::Move(target) = command {
            me = target;
        }
        self.records[0].coord = me;

        for i in 1..self.records.len() {
            let next = self.records[i].coord.step_toward(me);
            let walkable = self.walkable(next);

            let record = &mut self.records[i];
            let [countdown, state, _] = &mut record.params;
            *countdown -= 1;

            if *state == MinionState::Spawning.code() {
                if *countdown <= 0 {
                    *state = MinionState::Active.code();
                    *countdown = SIM_CONSTANTS.wanderer_life_time;
                }
            } else if walkable {
                record.coord = next;
            }
        }

        self.records
            .retain(|r| r.entity_type == ENTITY_TYPE_EXPLORER || r.params[0] > 0);
    }
}

struct View {
    cell_size: f32,
}

impl View {
    fn new(grid: &Grid) -> Self {
        View {
            cell_size: 1000. / grid.width().max(grid.height()) as f32,
        }
    }

    fn cell_rect(&self, gc: &mut CanvasGraphicsContext, pos: Coord) {
        let s = self.cell_size;
        let (x, y) = (pos.x as f32, pos.y as f32);
        gc.rect(x * s, 1000. - y * s, (x + 1.) * s, 1000. - (y + 1.) * s);
    }

    fn center(&self, pos: Coord) -> (f32, f32) {
        let s = self.cell_size;
        ((pos.x as f32 + 0.5) * s, 1000. - (pos.y as f32 + 0.5) * s)
    }
}

fn draw_grid(gc: &mut CanvasGraphicsContext, view: &View, grid: &Grid) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Coord::new(x, y);
            let color = match grid.cell(pos) {
                Some(Cell::Wall) => Color::Rgba(0.2, 0.2, 0.2, 1.),
                Some(Cell::SpawnPoint) => Color::Rgba(0.6, 0.4, 0.8, 1.),
                _ => Color::Rgba(0.95, 0.95, 0.9, 1.),
            };

            gc.new_path();
            view.cell_rect(gc, pos);
            gc.fill_color(color);
            gc.fill();
        }
    }
}

fn draw_radius(gc: &mut CanvasGraphicsContext, view: &View, grid: &Grid, me: Coord) {
    for pos in grid.empty_cells_within(me, EVASION_RADIUS) {
        gc.new_path();
        view.cell_rect(gc, pos);
        gc.fill_color(Color::Rgba(0.3, 0.6, 1.0, 0.25));
        gc.fill();
    }
}

fn draw_unit(gc: &mut CanvasGraphicsContext, view: &View, pos: Coord, col: Color) {
    let (x, y) = view.center(pos);
    gc.new_path();

    gc.circle(x, y, view.cell_size * 0.35);

    gc.fill_color(col);

    gc.fill();
    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
    gc.stroke();
}

fn draw_world(gc: &mut CanvasGraphicsContext, view: &View, world: &World) {
    for s in &world.spawning {
        draw_unit(gc, view, s.coord, Color::Rgba(1., 0., 0., 0.3));
    }

    for w in &world.wanderers {
        draw_unit(gc, view, w.coord, Color::Rgba(1., 0., 0., 1.));
    }

    for e in &world.explorers {
        draw_unit(gc, view, e.coord, Color::Rgba(0., 0., 1., 1.));
    }
}

fn draw_escape(gc: &mut CanvasGraphicsContext, view: &View, from: Coord, to: Coord) {
    let (x1, y1) = view.center(from);
    let (x2, y2) = view.center(to);

    gc.new_path();
    gc.move_to(x1, y1);
    gc.line_to(x2, y2);
    gc.circle(x2, y2, view.cell_size * 0.2);

    gc.line_width(3.0);
    gc.stroke_color(Color::Rgba(0.0, 0.7, 0.0, 1.0));
    gc.stroke();
}

struct App {
    sim_world: SimWorld,
    world: World,
    strategy: Strategy,
    command: Command,
    canvas: Canvas,

    draw_radius: bool,
}

impl App {
    fn new(canvas: Canvas) -> Self {
        let sim_world = SimWorld::gen_random_world();
        let world = sim_world.build_world();
        let strategy = Strategy::new(sim_world.grid.clone(), SIM_CONSTANTS);

        let mut app = App {
            sim_world,
            world,
            strategy,
            command: Command::Wait,
            canvas,
            draw_radius: true,
        };
        app.decide();
        app
    }

    fn decide(&mut self) {
        self.command = match self.strategy.play(&self.world) {
            Ok(command) => command,
            Err(err) => {
                log::error!("{err}");
                Command::Wait
            }
        };
        log::info!("{}", self.command);
    }

    fn redraw(&mut self) {
        let view = View::new(&self.sim_world.grid);
        let grid = &self.sim_world.grid;
        let world = &self.world;
        let command = self.command;
        let draw_radius_overlay = self.draw_radius;

        self.canvas.draw(|gc| {
            gc.clear_all_layers();
            gc.canvas_height(1000.0);
            gc.center_region(0.0, 0.0, 1000.0, 1000.0);

            draw_grid(gc, &view, grid);

            if let Ok(me) = world.me() {
                if draw_radius_overlay {
                    draw_radius(gc, &view, grid, me.coord);
                }

                if let Command::Move(target) = command {
                    draw_escape(gc, &view, me.coord, target);
                }
            }

            draw_world(gc, &view, world);
        });
    }

    fn regenerate_map(&mut self) {
        self.sim_world = SimWorld::gen_random_world();
        self.world = self.sim_world.build_world();
        self.strategy = Strategy::new(self.sim_world.grid.clone(), SIM_CONSTANTS);
        self.decide();

        self.redraw();
    }

    fn next_turn(&mut self) {
        self.sim_world.step(self.command);
        self.world = self.sim_world.build_world();
        self.decide();

        self.redraw();
    }
}

fn main() {
    env_logger::init();

    with_2d_graphics(|| {
        executor::block_on(async {
            let (canvas, mut events) = create_canvas_window_with_events("KUTULU");

            let mut app = App::new(canvas);

            app.redraw();

            while let Some(event) = events.next().await {
                match event {
                    DrawEvent::KeyDown(_, Some(Key::KeySpace)) => {
                        app.regenerate_map();
                    }
                    DrawEvent::KeyDown(_, Some(Key::KeyEscape)) => {
                        std::process::exit(0);
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key1)) => {
                        app.draw_radius = !app.draw_radius;
                        app.redraw();
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key2)) => {
                        app.next_turn();
                    }
                    _ => {}
                }
            }
        });
    });
}
