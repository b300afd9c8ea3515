fn main() {
    robot_runner::game::run();
}
