mod axes;
