//! Supporting node kinds: literals, variables, collections, calls and
//! statement structure.
use test_case::test_case;
use unparser::{Node, RenderConfig, unparse, unparse_with};

fn render(sexp: &str) -> String {
    let node: Node = sexp.parse().expect("valid s-expression");
    unparse(&node).expect("renders")
}

#[test_case("(int 42)", "42"; "int")]
#[test_case("(int -7)", "-7"; "negative int")]
#[test_case("(float 1.0)", "1.0"; "float keeps fraction")]
#[test_case("(float 2.5e-8)", "2.5e-8"; "float exponent")]
#[test_case(r#"(str "say \"hi\"\n")"#, r#""say \"hi\"\n""#; "str escapes")]
#[test_case(r##"(str "#{x}")"##, r#""\#{x}""#; "str interpolation escaped")]
#[test_case(r#"(str "\u{85}\x7F")"#, r#""\u{85}\x7F""#; "str control characters")]
#[test_case("(sym :name)", ":name"; "sym")]
#[test_case("(sym :valid?)", ":valid?"; "predicate sym")]
#[test_case("(sym :<=>)", ":<=>"; "operator sym")]
#[test_case(r#"(sym :"two words")"#, r#":"two words""#; "quoted sym")]
#[test_case("(nil)", "nil"; "nil")]
#[test_case("(true)", "true"; "true")]
#[test_case("(false)", "false"; "false")]
#[test_case("(self)", "self"; "self")]
fn literals(sexp: &str, expected: &str) {
    assert_eq!(render(sexp), expected);
}

#[test_case("(lvar :a)", "a"; "local")]
#[test_case("(ivar :@a)", "@a"; "instance")]
#[test_case("(gvar :$a)", "$a"; "global")]
#[test_case("(cvar :@@a)", "@@a"; "class")]
#[test_case("(const nil :Foo)", "Foo"; "const")]
#[test_case("(const (cbase) :Foo)", "::Foo"; "top level const")]
#[test_case("(const (const nil :A) :B)", "A::B"; "scoped const")]
#[test_case("(cvasgn :@@count (int 0))", "@@count = 0"; "class assignment")]
fn variables(sexp: &str, expected: &str) {
    assert_eq!(render(sexp), expected);
}

#[test_case("(array)", "[]"; "empty array")]
#[test_case("(array (int 1) (splat (lvar :rest)))", "[1, *rest]"; "array")]
#[test_case("(hash)", "{}"; "empty hash")]
#[test_case(r#"(hash (pair_rocket (str "k") (int 1)) (pair_colon (sym :v) (int 2)))"#, r#"{ "k" => 1, v: 2 }"#; "hash")]
#[test_case(r#"(hash (pair_colon (sym :"odd key") (int 1)))"#, r#"{ "odd key": 1 }"#; "quoted colon key")]
fn collections(sexp: &str, expected: &str) {
    assert_eq!(render(sexp), expected);
}

#[test_case("(send nil :puts)", "puts"; "bare call")]
#[test_case("(send (const nil :Foo) :new (int 1) (splat (lvar :rest)))", "Foo.new(1, *rest)"; "call with receiver")]
#[test_case("(send (lvar :a) :+ (send (lvar :b) :* (int 2)))", "a + (b * 2)"; "binary operands")]
#[test_case("(send (lvar :a) :!)", "!a"; "not")]
#[test_case("(send (lvar :a) :-@)", "-a"; "negate")]
#[test_case("(send (send (lvar :a) :+ (int 1)) :-@)", "-(a + 1)"; "negate binary")]
#[test_case("(send (int 1) :-@)", "-(1)"; "negate literal")]
#[test_case("(send (float 1.5) :+@)", "+(1.5)"; "unary plus literal")]
#[test_case("(send (send (lvar :a) :-@) :** (int 2))", "(-a) ** 2"; "negated base of power")]
#[test_case("(send (int -2) :** (int 2))", "(-2) ** 2"; "negative base of power")]
#[test_case("(send (float -1.5) :** (int 2))", "(-1.5) ** 2"; "negative float base of power")]
#[test_case("(send (int 2) :** (int -2))", "2 ** -2"; "negative exponent")]
#[test_case("(send (int -2) :* (int 2))", "-2 * 2"; "negative operand of product")]
#[test_case("(send (lvar :a) :[] (int 0))", "a[0]"; "index")]
#[test_case("(send (lvar :a) :[]= (int 0) (int 1))", "a[0] = 1"; "index assignment")]
#[test_case(r#"(send (lvar :a) :name= (str "x"))"#, r#"a.name = "x""#; "attribute assignment")]
#[test_case("(send (send (lvar :a) :name= (int 1)) :to_s)", "(a.name = 1).to_s"; "attribute assignment receiver")]
#[test_case("(or (and (lvar :a) (lvar :b)) (lvar :c))", "(a && b) || c"; "connectives")]
#[test_case("(send nil :p (begin (lvar :a) (lvar :b)))", "p((a; b))"; "grouped statements")]
fn calls(sexp: &str, expected: &str) {
    assert_eq!(render(sexp), expected);
}

#[test]
fn statements_one_per_line() {
    insta::assert_snapshot!(
        render("(begin (lvasgn :a (int 1)) (send nil :puts (lvar :a)))"),
        @r"
    a = 1
    puts(a)
    "
    );
}

#[test]
fn begin_block() {
    insta::assert_snapshot!(
        render("(kwbegin (send nil :a) (send nil :b))"),
        @r"
    begin
      a
      b
    end
    "
    );
    assert_eq!(render("(kwbegin)"), "begin\nend");
}

#[test]
fn method_body_statements() {
    insta::assert_snapshot!(
        render("(def :run (args) (begin (send nil :setup) (send nil :work)))"),
        @r"
    def run
      setup
      work
    end
    "
    );
}

#[test]
fn empty_method() {
    assert_eq!(render("(def :noop (args) nil)"), "def noop\nend");
}

#[test]
fn singleton_method_on_expression() {
    insta::assert_snapshot!(
        render("(defs (lvasgn :o (int 1)) :build (args) (int 1))"),
        @r"
    def (o = 1).build
      1
    end
    "
    );
}

#[test]
fn tab_indentation() {
    let node: Node = "(def :f (args) (int 1))".parse().expect("valid s-expression");
    let source = unparse_with(&node, RenderConfig::new().with_tabs()).expect("renders");
    assert_eq!(source, "def f\n\t1\nend");
}

#[test]
fn wide_indentation() {
    let node: Node = "(block (send nil :each) (args (arg :x)) (lvar :x))"
        .parse()
        .expect("valid s-expression");
    let source = unparse_with(&node, RenderConfig::new().with_indent_width(4)).expect("renders");
    assert_eq!(source, "each do |x|\n    x\nend");
}

#[test]
fn sexp_display_reads_back() {
    let text = r#"(def :greet (args (arg :name) (optarg :sep (str "a\tb"))) (send nil :puts (sym :"x y") (float 1.0) nil))"#;
    let node: Node = text.parse().expect("valid s-expression");
    assert_eq!(node.to_string(), text);
    assert_eq!(node.to_string().parse::<Node>(), Ok(node));
}
